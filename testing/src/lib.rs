//! # Event Insights Testing
//!
//! Testing utilities and fixtures for the Event Insights workspace.
//!
//! This crate provides:
//! - [`SnapshotBuilder`]: a fluent builder for deterministic record sets
//! - Deterministic identifier and timestamp helpers
//! - Property-based testing strategies
//! - Opt-in tracing output for tests
//!
//! ## Example
//!
//! ```
//! use event_insights_core::types::EventType;
//! use event_insights_testing::SnapshotBuilder;
//!
//! let mut builder = SnapshotBuilder::new();
//! let ada = builder.user("ada");
//! let event = builder.event("Summer Jam", 2025, EventType::Concert, ada);
//! builder.comments(event, &[4, 5, 3]);
//! builder.purchased_tickets(event, 2);
//!
//! let snapshot = builder.build();
//! assert_eq!(snapshot.events().len(), 1);
//! assert_eq!(snapshot.comments().len(), 3);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use event_insights_core::record::{CommentRecord, EventRecord, TicketRecord, UserRecord};
use event_insights_core::snapshot::StatsSnapshot;
use event_insights_core::source::InMemorySource;
use event_insights_core::types::{EventId, EventType, LocationId, TicketId, UserId};
use uuid::Uuid;

/// Fixed reference instant used for generated timestamps
/// (2025-01-01 00:00:00 UTC).
///
/// # Panics
///
/// Panics if the hardcoded timestamp is invalid, which never happens.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap()
}

/// A start date inside the given calendar year (June 1st, 20:00 UTC).
///
/// # Panics
///
/// Panics for years `chrono` cannot represent; test years never reach that.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn start_date_in_year(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 6, 1, 20, 0, 0).single().unwrap()
}

/// Fluent builder for deterministic record fixtures.
///
/// Identifiers are derived from an internal counter, so two builders fed the
/// same calls produce identical snapshots. Insertion order is the
/// source-sequence order ranking tie-breaks inherit.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    source: InMemorySource,
    next_id: u128,
}

impl SnapshotBuilder {
    /// Creates an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_uuid(&mut self) -> Uuid {
        self.next_id += 1;
        Uuid::from_u128(self.next_id)
    }

    /// Adds a user and returns its id
    pub fn user(&mut self, username: &str) -> UserId {
        let id = UserId::from_uuid(self.next_uuid());
        self.source
            .push_user(UserRecord::new(id, username.to_string()));
        id
    }

    /// Adds an event starting in `year` and returns its id
    pub fn event(
        &mut self,
        title: &str,
        year: i32,
        event_type: EventType,
        organizer: UserId,
    ) -> EventId {
        let id = EventId::from_uuid(self.next_uuid());
        let location = LocationId::from_uuid(self.next_uuid());
        self.source.push_event(EventRecord::new(
            id,
            title.to_string(),
            start_date_in_year(year),
            event_type,
            location,
            organizer,
        ));
        id
    }

    /// Adds one comment per rating to the event
    pub fn comments(&mut self, event_id: EventId, ratings: &[i32]) {
        for &rating in ratings {
            self.source
                .push_comment(CommentRecord::new(event_id, rating, test_instant()));
        }
    }

    /// Adds `count` purchased tickets to the event
    pub fn purchased_tickets(&mut self, event_id: EventId, count: usize) {
        self.tickets(event_id, count, true);
    }

    /// Adds `count` unsold tickets to the event
    pub fn unsold_tickets(&mut self, event_id: EventId, count: usize) {
        self.tickets(event_id, count, false);
    }

    fn tickets(&mut self, event_id: EventId, count: usize, purchased: bool) {
        for _ in 0..count {
            let id = TicketId::from_uuid(self.next_uuid());
            self.source
                .push_ticket(TicketRecord::new(id, event_id, purchased));
        }
    }

    /// Finishes the builder into a record source
    #[must_use]
    pub fn into_source(self) -> InMemorySource {
        self.source
    }

    /// Loads a snapshot from the accumulated records
    ///
    /// # Panics
    ///
    /// Never panics: the in-memory source is infallible.
    #[must_use]
    #[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
    pub fn build(&self) -> StatsSnapshot {
        StatsSnapshot::load(&self.source).unwrap()
    }
}

/// Property-based testing strategies for domain values.
pub mod strategies {
    use event_insights_core::types::EventType;
    use proptest::prelude::*;

    /// A valid star rating (1 through 5)
    pub fn rating() -> impl Strategy<Value = i32> {
        1..=5i32
    }

    /// Any event-type tag
    pub fn event_type() -> impl Strategy<Value = EventType> {
        prop::sample::select(EventType::ALL.to_vec())
    }

    /// A plausible event start year
    pub fn year() -> impl Strategy<Value = i32> {
        2000..=2035i32
    }
}

/// Installs a tracing subscriber writing to the test harness.
///
/// Safe to call from every test; repeated installs are ignored. The filter
/// honors `RUST_LOG`.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_is_deterministic() {
        let build = || {
            let mut builder = SnapshotBuilder::new();
            let user = builder.user("ada");
            let event = builder.event("Jam", 2025, EventType::Concert, user);
            builder.purchased_tickets(event, 3);
            builder.build()
        };

        let (first, second) = (build(), build());
        assert_eq!(first.events(), second.events());
        assert_eq!(first.tickets(), second.tickets());
        assert_eq!(first.users(), second.users());
    }

    #[test]
    fn test_builder_snapshot_is_consistent() {
        let mut builder = SnapshotBuilder::new();
        let user = builder.user("grace");
        let event = builder.event("Expo", 2024, EventType::Festival, user);
        builder.comments(event, &[5]);
        builder.unsold_tickets(event, 2);

        let snapshot = builder.build();
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.tickets().len(), 2);
    }
}
