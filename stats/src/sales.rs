//! Ticket-sales statistics.
//!
//! Only tickets with `purchased = true` count as sales; allocated but unsold
//! inventory is invisible here.

use crate::group::{group_by, take_top_by};
use event_insights_core::record::EventRecord;
use event_insights_core::snapshot::StatsSnapshot;
use event_insights_core::types::EventType;
use serde::Serialize;
use std::collections::HashMap;

/// One entry of the best-selling ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventSales {
    /// The event the tickets were sold for
    pub event: EventRecord,
    /// Purchased tickets for the event
    pub tickets_sold: usize,
}

/// Purchased-ticket share of one event-type tag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypePercentage {
    /// The event-type tag
    pub event_type: EventType,
    /// Purchased tickets across all events of that type
    pub tickets_sold: usize,
    /// Share of all purchased tickets, in percent. 0.0 for every tag when no
    /// tickets were sold at all.
    pub percentage: f64,
}

/// Events ranked by purchased-ticket count, descending; events with no
/// purchased tickets are absent (a sale count of zero is "no data").
pub(crate) fn best_selling_events(snapshot: &StatsSnapshot, n: usize) -> Vec<EventSales> {
    let purchased = snapshot.tickets().iter().filter(|ticket| ticket.purchased);

    let entries: Vec<EventSales> = group_by(purchased, |ticket| ticket.event_id)
        .into_iter()
        .filter_map(|(event_id, tickets)| {
            let event = snapshot.event(&event_id)?;
            Some(EventSales {
                event: event.clone(),
                tickets_sold: tickets.len(),
            })
        })
        .collect();

    take_top_by(entries, n, |a, b| a.tickets_sold.cmp(&b.tickets_sold))
}

/// Purchased tickets per event type as a share of all purchased tickets.
///
/// Every type present among the snapshot's events is reported, so a type
/// that sold nothing shows up as 0.0 instead of disappearing. The shares sum
/// to 100 whenever any ticket was sold; with zero sales every share is 0.0,
/// never NaN.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage_of_tickets_sold_by_type(snapshot: &StatsSnapshot) -> Vec<TypePercentage> {
    // One slot per type present among the events, in first-encounter order.
    let mut sold_by_type: Vec<(EventType, usize)> = Vec::new();
    let mut slot_of_type: HashMap<EventType, usize> = HashMap::new();
    for event in snapshot.events() {
        slot_of_type.entry(event.event_type).or_insert_with(|| {
            sold_by_type.push((event.event_type, 0));
            sold_by_type.len() - 1
        });
    }

    // Single pass over purchased tickets, joined to a type through the
    // owning event. Tickets referencing an event absent from the snapshot
    // have no type and are excluded from numerator and denominator alike.
    for ticket in snapshot.tickets().iter().filter(|ticket| ticket.purchased) {
        let slot = snapshot
            .event(&ticket.event_id)
            .and_then(|event| slot_of_type.get(&event.event_type).copied());
        if let Some(slot) = slot {
            sold_by_type[slot].1 += 1;
        }
    }

    let total: usize = sold_by_type.iter().map(|(_, sold)| sold).sum();

    sold_by_type
        .into_iter()
        .map(|(event_type, tickets_sold)| TypePercentage {
            event_type,
            tickets_sold,
            percentage: if total == 0 {
                0.0
            } else {
                tickets_sold as f64 / total as f64 * 100.0
            },
        })
        .collect()
}
