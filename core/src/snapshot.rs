//! One consistent read of the record set.
//!
//! A [`StatsSnapshot`] is loaded through a [`RecordSource`] at the start of
//! an aggregation call and stays read-only for its duration. This replaces
//! any shared-connection arrangement: callers inject data, not a handle to a
//! live store.

use crate::record::{CommentRecord, EventRecord, TicketRecord, UserRecord};
use crate::source::{
    CommentFilter, EventFilter, RecordSource, SourceError, TicketFilter, UserFilter,
};
use crate::types::{EventId, UserId};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The record source failed
    #[error(transparent)]
    Source(#[from] SourceError),
    /// A comment references an event absent from the snapshot
    #[error("comment references unknown event {event_id}")]
    DanglingComment {
        /// The missing event
        event_id: EventId,
    },
    /// A ticket references an event absent from the snapshot
    #[error("ticket references unknown event {event_id}")]
    DanglingTicket {
        /// The missing event
        event_id: EventId,
    },
}

/// A read-only copy of the four record collections for one aggregation call.
///
/// Collections keep the source-sequence order they were fetched in; ranking
/// tie-breaks rely on that order being stable.
#[derive(Clone, Debug, Default)]
pub struct StatsSnapshot {
    events: Vec<EventRecord>,
    comments: Vec<CommentRecord>,
    tickets: Vec<TicketRecord>,
    users: Vec<UserRecord>,
    events_by_id: HashMap<EventId, usize>,
    users_by_id: HashMap<UserId, usize>,
}

impl StatsSnapshot {
    /// Builds a snapshot from already-fetched collections.
    #[must_use]
    pub fn from_records(
        events: Vec<EventRecord>,
        comments: Vec<CommentRecord>,
        tickets: Vec<TicketRecord>,
        users: Vec<UserRecord>,
    ) -> Self {
        let events_by_id = events
            .iter()
            .enumerate()
            .map(|(index, event)| (event.id, index))
            .collect();
        let users_by_id = users
            .iter()
            .enumerate()
            .map(|(index, user)| (user.id, index))
            .collect();

        Self {
            events,
            comments,
            tickets,
            users,
            events_by_id,
            users_by_id,
        }
    }

    /// Loads the full record set through a source.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Source`] if any of the four fetches fails.
    pub fn load<S: RecordSource>(source: &S) -> Result<Self, SnapshotError> {
        let events = source.fetch_events(&EventFilter::all())?;
        let comments = source.fetch_comments(&CommentFilter::all())?;
        let tickets = source.fetch_tickets(&TicketFilter::all())?;
        let users = source.fetch_users(&UserFilter::all())?;

        debug!(
            events = events.len(),
            comments = comments.len(),
            tickets = tickets.len(),
            users = users.len(),
            "loaded statistics snapshot"
        );

        Ok(Self::from_records(events, comments, tickets, users))
    }

    /// Checks referential integrity: every comment and ticket must reference
    /// an event present in the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first dangling reference found.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for comment in &self.comments {
            if !self.events_by_id.contains_key(&comment.event_id) {
                return Err(SnapshotError::DanglingComment {
                    event_id: comment.event_id,
                });
            }
        }
        for ticket in &self.tickets {
            if !self.events_by_id.contains_key(&ticket.event_id) {
                return Err(SnapshotError::DanglingTicket {
                    event_id: ticket.event_id,
                });
            }
        }
        Ok(())
    }

    /// All events, in source-sequence order
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// All comments, in source-sequence order
    #[must_use]
    pub fn comments(&self) -> &[CommentRecord] {
        &self.comments
    }

    /// All tickets, in source-sequence order
    #[must_use]
    pub fn tickets(&self) -> &[TicketRecord] {
        &self.tickets
    }

    /// All users, in source-sequence order
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Looks up an event by id
    #[must_use]
    pub fn event(&self, id: &EventId) -> Option<&EventRecord> {
        self.events_by_id.get(id).map(|&index| &self.events[index])
    }

    /// Looks up a user by id
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&UserRecord> {
        self.users_by_id.get(id).map(|&index| &self.users[index])
    }

    /// Whether the snapshot holds no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.comments.is_empty()
            && self.tickets.is_empty()
            && self.users.is_empty()
    }
}
