//! Per-year breakdown of event types.

use crate::group::group_by;
use event_insights_core::snapshot::StatsSnapshot;
use event_insights_core::types::EventType;
use serde::Serialize;

/// Count of events carrying one type tag within a year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    /// The event-type tag
    pub event_type: EventType,
    /// Events of that type starting in the year
    pub count: usize,
}

/// All event-type counts for one calendar year.
///
/// Only types that actually occur in the year are listed, so the counts
/// always sum to the number of events starting that year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct YearBreakdown {
    /// Calendar year of the events' start dates
    pub year: i32,
    /// Per-type counts, ordered by tag
    pub counts: Vec<TypeCount>,
}

impl YearBreakdown {
    /// Total events starting in this year
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

/// Groups the snapshot's events by start year, then by type tag.
///
/// Years are ordered descending (most recent first); within a year the type
/// counts are ordered by tag.
pub(crate) fn event_types_by_year(snapshot: &StatsSnapshot) -> Vec<YearBreakdown> {
    let mut years = group_by(snapshot.events(), |event| event.start_year());
    years.sort_by_key(|(year, _)| std::cmp::Reverse(*year));

    years
        .into_iter()
        .map(|(year, events)| {
            let mut counts: Vec<TypeCount> = group_by(events, |event| event.event_type)
                .into_iter()
                .map(|(event_type, grouped)| TypeCount {
                    event_type,
                    count: grouped.len(),
                })
                .collect();
            counts.sort_by_key(|c| c.event_type);

            YearBreakdown { year, counts }
        })
        .collect()
}
