//! Organizer (user) rankings.
//!
//! Events are grouped by their owning user; rankings count events directly
//! or sum purchased tickets across each organizer's events.

use crate::group::{group_by, take_top_by};
use event_insights_core::snapshot::StatsSnapshot;
use event_insights_core::types::{EventId, UserId};
use serde::Serialize;
use std::collections::HashMap;

/// One entry of the most-events-organized ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrganizerEvents {
    /// The organizing user
    pub organizer: UserId,
    /// Display name, when the user record is present in the snapshot
    pub username: Option<String>,
    /// Events owned by the user
    pub event_count: usize,
}

/// One entry of the most-tickets-sold ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrganizerSales {
    /// The organizing user
    pub organizer: UserId,
    /// Display name, when the user record is present in the snapshot
    pub username: Option<String>,
    /// Purchased tickets summed across all the user's events
    pub tickets_sold: usize,
}

/// Users ranked by how many events they organize, descending.
pub(crate) fn users_with_most_events(snapshot: &StatsSnapshot, n: usize) -> Vec<OrganizerEvents> {
    let entries: Vec<OrganizerEvents> = group_by(snapshot.events(), |event| event.organizer)
        .into_iter()
        .map(|(organizer, events)| OrganizerEvents {
            organizer,
            username: snapshot.user(&organizer).map(|user| user.username.clone()),
            event_count: events.len(),
        })
        .collect();

    take_top_by(entries, n, |a, b| a.event_count.cmp(&b.event_count))
}

/// Users ranked by purchased tickets across their events, descending.
pub(crate) fn users_with_most_tickets_sold(
    snapshot: &StatsSnapshot,
    n: usize,
) -> Vec<OrganizerSales> {
    // Purchased-ticket count per event, computed once.
    let mut sold_per_event: HashMap<EventId, usize> = HashMap::new();
    for ticket in snapshot.tickets().iter().filter(|ticket| ticket.purchased) {
        *sold_per_event.entry(ticket.event_id).or_insert(0) += 1;
    }

    let entries: Vec<OrganizerSales> = group_by(snapshot.events(), |event| event.organizer)
        .into_iter()
        .map(|(organizer, events)| OrganizerSales {
            organizer,
            username: snapshot.user(&organizer).map(|user| user.username.clone()),
            tickets_sold: events
                .iter()
                .map(|event| sold_per_event.get(&event.id).copied().unwrap_or(0))
                .sum(),
        })
        .collect();

    take_top_by(entries, n, |a, b| a.tickets_sold.cmp(&b.tickets_sold))
}
