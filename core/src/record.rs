//! Immutable record types read from the ticketing store.
//!
//! These are denormalized snapshots of the persistent entities, carrying only
//! the fields the statistics engine consumes. Storage concerns (pictures,
//! addresses, QR codes) stay with the owning service.

use crate::types::{EventId, EventType, LocationId, TicketId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One event as read from storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique event identifier
    pub id: EventId,
    /// Event title (e.g., "Summer Jam 2026")
    pub title: String,
    /// When the event starts; statistics group by this date's year
    pub start_date: DateTime<Utc>,
    /// Category tag the event was filed under
    pub event_type: EventType,
    /// Venue location reference
    pub location: LocationId,
    /// User who organizes (owns) this event
    pub organizer: UserId,
}

impl EventRecord {
    /// Creates a new `EventRecord`
    #[must_use]
    pub const fn new(
        id: EventId,
        title: String,
        start_date: DateTime<Utc>,
        event_type: EventType,
        location: LocationId,
        organizer: UserId,
    ) -> Self {
        Self {
            id,
            title,
            start_date,
            event_type,
            location,
            organizer,
        }
    }

    /// Calendar year the event starts in
    #[must_use]
    pub fn start_year(&self) -> i32 {
        use chrono::Datelike;
        self.start_date.year()
    }
}

/// One comment left on an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Event the comment was left on
    pub event_id: EventId,
    /// Star rating, nominally 1-5
    pub rating: i32,
    /// When the comment was posted
    pub posted_at: DateTime<Utc>,
}

impl CommentRecord {
    /// Creates a new `CommentRecord`
    #[must_use]
    pub const fn new(event_id: EventId, rating: i32, posted_at: DateTime<Utc>) -> Self {
        Self {
            event_id,
            rating,
            posted_at,
        }
    }
}

/// One ticket issued for an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Ticket identifier
    pub id: TicketId,
    /// Event the ticket admits to
    pub event_id: EventId,
    /// Whether the ticket has actually been purchased (unpurchased tickets
    /// are allocated inventory and never count as sales)
    pub purchased: bool,
}

impl TicketRecord {
    /// Creates a new `TicketRecord`
    #[must_use]
    pub const fn new(id: TicketId, event_id: EventId, purchased: bool) -> Self {
        Self {
            id,
            event_id,
            purchased,
        }
    }
}

/// One registered user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User identifier
    pub id: UserId,
    /// Display name
    pub username: String,
}

impl UserRecord {
    /// Creates a new `UserRecord`
    #[must_use]
    pub const fn new(id: UserId, username: String) -> Self {
        Self { id, username }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_start_year() {
        let event = EventRecord::new(
            EventId::new(),
            "New Year Party".to_string(),
            Utc.with_ymd_and_hms(2025, 12, 31, 22, 0, 0).single().unwrap(),
            EventType::Party,
            LocationId::new(),
            UserId::new(),
        );
        assert_eq!(event.start_year(), 2025);
    }
}
