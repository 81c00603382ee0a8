//! # Event Insights Core
//!
//! Domain records, snapshots, and the record-source seam for the Event
//! Insights statistics engine.
//!
//! This crate provides the **read side's raw material**: immutable record
//! types pulled from the ticketing store, a [`snapshot::StatsSnapshot`]
//! bundling one consistent read of those records, and the
//! [`source::RecordSource`] trait through which a storage backend hands
//! records over.
//!
//! ## Architecture Principles
//!
//! - Records are read-only snapshots for the duration of one aggregation
//!   call; nothing in this crate mutates them.
//! - Storage is an external collaborator behind the [`source::RecordSource`]
//!   seam. The bundled [`source::InMemorySource`] serves tests and small
//!   deployments; database-backed sources live with the application.
//! - No shared connection state: callers load an explicit snapshot per call
//!   and pass it to the aggregator.
//!
//! ## Example
//!
//! ```
//! use event_insights_core::record::EventRecord;
//! use event_insights_core::snapshot::StatsSnapshot;
//! use event_insights_core::source::InMemorySource;
//! use event_insights_core::types::{EventId, EventType, LocationId, UserId};
//! use chrono::Utc;
//!
//! let source = InMemorySource::new()
//!     .with_events(vec![EventRecord::new(
//!         EventId::new(),
//!         "Summer Jam".to_string(),
//!         Utc::now(),
//!         EventType::Concert,
//!         LocationId::new(),
//!         UserId::new(),
//!     )]);
//!
//! let snapshot = StatsSnapshot::load(&source).unwrap();
//! assert_eq!(snapshot.events().len(), 1);
//! ```

pub mod record;
pub mod snapshot;
pub mod source;
pub mod types;

pub use record::{CommentRecord, EventRecord, TicketRecord, UserRecord};
pub use snapshot::{SnapshotError, StatsSnapshot};
pub use source::{
    CommentFilter, EventFilter, InMemorySource, RecordSource, SourceError, TicketFilter,
    UserFilter,
};
pub use types::{EventId, EventType, LocationId, TicketId, UserId};
