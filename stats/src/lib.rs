//! # Event Insights Stats
//!
//! The statistics aggregation engine: grouped, ranked summaries over one
//! read-only snapshot of events, comments, tickets, and users.
//!
//! ## Operations
//!
//! - [`Aggregator::event_types_by_year`] — per-year counts per event type
//! - [`Aggregator::average_rating_for_event`] / [`Aggregator::overall_average_rating`]
//! - [`Aggregator::top_rated_events`] — mean rating ranking (zero-comment
//!   events excluded)
//! - [`Aggregator::most_commented_events`] — comment-count ranking
//! - [`Aggregator::best_selling_events`] — purchased-ticket ranking
//! - [`Aggregator::percentage_of_tickets_sold_by_type`] — sale shares per type
//! - [`Aggregator::users_with_most_events`] /
//!   [`Aggregator::users_with_most_tickets_sold`] — organizer rankings
//!
//! ## Ranking Semantics
//!
//! Every ranking follows one algorithm: group records by key preserving
//! first-encounter order, reduce each group to a scalar metric, stable-sort
//! descending, truncate to `n`. `n` beyond the available groups returns all
//! of them; `n == 0` or `n` above the configured cap is an
//! [`StatsError::InvalidArgument`]. Ties keep the first-encountered order of
//! the source sequence.
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use event_insights_core::record::{CommentRecord, EventRecord};
//! use event_insights_core::snapshot::StatsSnapshot;
//! use event_insights_core::types::{EventId, EventType, LocationId, UserId};
//! use event_insights_stats::Aggregator;
//!
//! let event = EventRecord::new(
//!     EventId::new(),
//!     "Harbor Festival".to_string(),
//!     Utc::now(),
//!     EventType::Festival,
//!     LocationId::new(),
//!     UserId::new(),
//! );
//! let snapshot = StatsSnapshot::from_records(
//!     vec![event.clone()],
//!     vec![
//!         CommentRecord::new(event.id, 4, Utc::now()),
//!         CommentRecord::new(event.id, 5, Utc::now()),
//!     ],
//!     vec![],
//!     vec![],
//! );
//!
//! let aggregator = Aggregator::new(&snapshot);
//! let top = aggregator.top_rated_events(3).unwrap();
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].average_rating, 4.5);
//! ```

pub mod aggregator;
pub mod calendar;
pub mod config;
pub mod error;
mod group;
pub mod organizers;
pub mod ratings;
pub mod sales;

pub use aggregator::{Aggregator, with_snapshot};
pub use calendar::{TypeCount, YearBreakdown};
pub use config::AggregatorConfig;
pub use error::StatsError;
pub use organizers::{OrganizerEvents, OrganizerSales};
pub use ratings::{CommentedEvent, RatedEvent};
pub use sales::{EventSales, TypePercentage};
