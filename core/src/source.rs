//! The record-source seam between the statistics engine and storage.
//!
//! A [`RecordSource`] hands over the current record set, optionally narrowed
//! by a filter. Each accessor is one consistent read; the engine loads all
//! four collections into a snapshot before computing anything, so a source
//! never sees partial writes from the aggregation side.
//!
//! [`InMemorySource`] is the bundled implementation, used by tests and small
//! deployments. Database-backed sources live with the application that owns
//! the connection pool.

use crate::record::{CommentRecord, EventRecord, TicketRecord, UserRecord};
use crate::types::{EventId, EventType, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a record source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not be read
    #[error("storage unavailable: {reason}")]
    Unavailable {
        /// Human-readable failure description from the backend
        reason: String,
    },
    /// A stored record failed to decode into its record type
    #[error("corrupt record in {collection}: {detail}")]
    CorruptRecord {
        /// Which collection held the record
        collection: &'static str,
        /// What failed to decode
        detail: String,
    },
}

// ============================================================================
// Filters
// ============================================================================

/// Narrowing criteria for [`RecordSource::fetch_events`].
///
/// Empty filter (the default) selects every record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Only events starting in this calendar year
    pub year: Option<i32>,
    /// Only events with this type tag
    pub event_type: Option<EventType>,
    /// Only events organized by this user
    pub organizer: Option<UserId>,
}

impl EventFilter {
    /// Filter matching every event
    #[must_use]
    pub const fn all() -> Self {
        Self {
            year: None,
            event_type: None,
            organizer: None,
        }
    }

    /// Whether the given event passes this filter
    #[must_use]
    pub fn matches(&self, event: &EventRecord) -> bool {
        self.year.is_none_or(|year| event.start_year() == year)
            && self.event_type.is_none_or(|ty| event.event_type == ty)
            && self.organizer.is_none_or(|user| event.organizer == user)
    }
}

/// Narrowing criteria for [`RecordSource::fetch_comments`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFilter {
    /// Only comments on this event
    pub event_id: Option<EventId>,
}

impl CommentFilter {
    /// Filter matching every comment
    #[must_use]
    pub const fn all() -> Self {
        Self { event_id: None }
    }

    /// Filter matching comments on one event
    #[must_use]
    pub const fn for_event(event_id: EventId) -> Self {
        Self {
            event_id: Some(event_id),
        }
    }

    /// Whether the given comment passes this filter
    #[must_use]
    pub fn matches(&self, comment: &CommentRecord) -> bool {
        self.event_id.is_none_or(|id| comment.event_id == id)
    }
}

/// Narrowing criteria for [`RecordSource::fetch_tickets`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFilter {
    /// Only tickets for this event
    pub event_id: Option<EventId>,
    /// Only tickets with this purchase state
    pub purchased: Option<bool>,
}

impl TicketFilter {
    /// Filter matching every ticket
    #[must_use]
    pub const fn all() -> Self {
        Self {
            event_id: None,
            purchased: None,
        }
    }

    /// Filter matching only purchased tickets
    #[must_use]
    pub const fn purchased_only() -> Self {
        Self {
            event_id: None,
            purchased: Some(true),
        }
    }

    /// Whether the given ticket passes this filter
    #[must_use]
    pub fn matches(&self, ticket: &TicketRecord) -> bool {
        self.event_id.is_none_or(|id| ticket.event_id == id)
            && self.purchased.is_none_or(|p| ticket.purchased == p)
    }
}

/// Narrowing criteria for [`RecordSource::fetch_users`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Only this user
    pub id: Option<UserId>,
}

impl UserFilter {
    /// Filter matching every user
    #[must_use]
    pub const fn all() -> Self {
        Self { id: None }
    }

    /// Whether the given user passes this filter
    #[must_use]
    pub fn matches(&self, user: &UserRecord) -> bool {
        self.id.is_none_or(|id| user.id == id)
    }
}

// ============================================================================
// RecordSource
// ============================================================================

/// Read-only access to the four record collections.
///
/// Implementations return records in a stable order: ranking tie-breaks fall
/// back to first-encountered order in the returned sequence, so two loads of
/// an unchanged store must yield the same sequence.
///
/// All accessors are synchronous; a backend that reads over the network
/// should materialize the records before handing them to the engine.
pub trait RecordSource: Send + Sync {
    /// Fetch events matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backing store cannot be read.
    fn fetch_events(&self, filter: &EventFilter) -> Result<Vec<EventRecord>, SourceError>;

    /// Fetch comments matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backing store cannot be read.
    fn fetch_comments(&self, filter: &CommentFilter) -> Result<Vec<CommentRecord>, SourceError>;

    /// Fetch tickets matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backing store cannot be read.
    fn fetch_tickets(&self, filter: &TicketFilter) -> Result<Vec<TicketRecord>, SourceError>;

    /// Fetch users matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backing store cannot be read.
    fn fetch_users(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, SourceError>;
}

// ============================================================================
// In-memory implementation
// ============================================================================

/// Record source backed by plain vectors.
///
/// Insertion order is the source-sequence order that ranking tie-breaks
/// inherit, which makes this implementation fully deterministic.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    events: Vec<EventRecord>,
    comments: Vec<CommentRecord>,
    tickets: Vec<TicketRecord>,
    users: Vec<UserRecord>,
}

impl InMemorySource {
    /// Creates an empty `InMemorySource`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            comments: Vec::new(),
            tickets: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Replaces the event collection
    #[must_use]
    pub fn with_events(mut self, events: Vec<EventRecord>) -> Self {
        self.events = events;
        self
    }

    /// Replaces the comment collection
    #[must_use]
    pub fn with_comments(mut self, comments: Vec<CommentRecord>) -> Self {
        self.comments = comments;
        self
    }

    /// Replaces the ticket collection
    #[must_use]
    pub fn with_tickets(mut self, tickets: Vec<TicketRecord>) -> Self {
        self.tickets = tickets;
        self
    }

    /// Replaces the user collection
    #[must_use]
    pub fn with_users(mut self, users: Vec<UserRecord>) -> Self {
        self.users = users;
        self
    }

    /// Appends a single event
    pub fn push_event(&mut self, event: EventRecord) {
        self.events.push(event);
    }

    /// Appends a single comment
    pub fn push_comment(&mut self, comment: CommentRecord) {
        self.comments.push(comment);
    }

    /// Appends a single ticket
    pub fn push_ticket(&mut self, ticket: TicketRecord) {
        self.tickets.push(ticket);
    }

    /// Appends a single user
    pub fn push_user(&mut self, user: UserRecord) {
        self.users.push(user);
    }
}

impl RecordSource for InMemorySource {
    fn fetch_events(&self, filter: &EventFilter) -> Result<Vec<EventRecord>, SourceError> {
        Ok(self
            .events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    fn fetch_comments(&self, filter: &CommentFilter) -> Result<Vec<CommentRecord>, SourceError> {
        Ok(self
            .comments
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    fn fetch_tickets(&self, filter: &TicketFilter) -> Result<Vec<TicketRecord>, SourceError> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    fn fetch_users(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, SourceError> {
        Ok(self
            .users
            .iter()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{LocationId, TicketId};
    use chrono::{TimeZone, Utc};

    fn event(year: i32, event_type: EventType) -> EventRecord {
        EventRecord::new(
            EventId::new(),
            format!("{event_type} {year}"),
            Utc.with_ymd_and_hms(year, 6, 1, 20, 0, 0).single().unwrap(),
            event_type,
            LocationId::new(),
            UserId::new(),
        )
    }

    #[test]
    fn test_empty_filter_selects_everything() {
        let source = InMemorySource::new().with_events(vec![
            event(2024, EventType::Concert),
            event(2025, EventType::Party),
        ]);

        let events = source.fetch_events(&EventFilter::all()).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_event_filter_by_year_and_type() {
        let source = InMemorySource::new().with_events(vec![
            event(2024, EventType::Concert),
            event(2024, EventType::Party),
            event(2025, EventType::Concert),
        ]);

        let filter = EventFilter {
            year: Some(2024),
            event_type: Some(EventType::Concert),
            organizer: None,
        };
        let events = source.fetch_events(&filter).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start_year(), 2024);
    }

    #[test]
    fn test_ticket_filter_purchased_only() {
        let event_id = EventId::new();
        let source = InMemorySource::new().with_tickets(vec![
            TicketRecord::new(TicketId::new(), event_id, true),
            TicketRecord::new(TicketId::new(), event_id, false),
        ]);

        let tickets = source.fetch_tickets(&TicketFilter::purchased_only()).unwrap();
        assert_eq!(tickets.len(), 1);
        assert!(tickets[0].purchased);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let first = event(2024, EventType::Concert);
        let second = event(2024, EventType::Concert);
        let source =
            InMemorySource::new().with_events(vec![first.clone(), second.clone()]);

        let events = source.fetch_events(&EventFilter::all()).unwrap();
        assert_eq!(events[0].id, first.id);
        assert_eq!(events[1].id, second.id);
    }
}
