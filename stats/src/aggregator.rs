//! The statistics aggregation engine.
//!
//! An [`Aggregator`] borrows one [`StatsSnapshot`] and answers every
//! statistics query over it. Each call is an independent, side-effect-free
//! computation; nothing here touches storage or shares state between calls.

use crate::calendar::{self, YearBreakdown};
use crate::config::AggregatorConfig;
use crate::error::StatsError;
use crate::organizers::{self, OrganizerEvents, OrganizerSales};
use crate::ratings::{self, CommentedEvent, RatedEvent};
use crate::sales::{self, EventSales, TypePercentage};
use event_insights_core::snapshot::StatsSnapshot;
use event_insights_core::source::RecordSource;
use event_insights_core::types::EventId;
use tracing::debug;

/// Read-only statistics over one snapshot of the ticketing records.
///
/// # Example
///
/// ```
/// use event_insights_core::snapshot::StatsSnapshot;
/// use event_insights_stats::Aggregator;
///
/// let snapshot = StatsSnapshot::default();
/// let aggregator = Aggregator::new(&snapshot);
///
/// assert!(aggregator.event_types_by_year().is_empty());
/// assert_eq!(aggregator.overall_average_rating(), 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Aggregator<'a> {
    snapshot: &'a StatsSnapshot,
    config: AggregatorConfig,
}

impl<'a> Aggregator<'a> {
    /// Creates an aggregator over a snapshot with the default configuration
    #[must_use]
    pub fn new(snapshot: &'a StatsSnapshot) -> Self {
        Self::with_config(snapshot, AggregatorConfig::default())
    }

    /// Creates an aggregator with an explicit configuration
    #[must_use]
    pub const fn with_config(snapshot: &'a StatsSnapshot, config: AggregatorConfig) -> Self {
        Self { snapshot, config }
    }

    /// The snapshot this aggregator reads
    #[must_use]
    pub const fn snapshot(&self) -> &StatsSnapshot {
        self.snapshot
    }

    /// Rejects ranking sizes outside `1..=max_ranking_limit`.
    ///
    /// `n` larger than the available group count is legal everywhere and
    /// clamps to the data; the cap only guards absurd requests.
    fn check_limit(&self, n: usize) -> Result<(), StatsError> {
        if n == 0 {
            return Err(StatsError::invalid_argument(
                "ranking size must be at least 1",
            ));
        }
        if n > self.config.max_ranking_limit {
            return Err(StatsError::invalid_argument(format!(
                "ranking size {n} exceeds the configured cap of {}",
                self.config.max_ranking_limit
            )));
        }
        Ok(())
    }

    /// Events grouped by start year, then by type tag; years descending.
    #[must_use]
    pub fn event_types_by_year(&self) -> Vec<YearBreakdown> {
        let breakdown = calendar::event_types_by_year(self.snapshot);
        debug!(years = breakdown.len(), "computed event types by year");
        breakdown
    }

    /// Mean rating for one event; 0.0 for an unknown or uncommented event.
    #[must_use]
    pub fn average_rating_for_event(&self, event_id: &EventId) -> f64 {
        ratings::average_rating_for_event(self.snapshot, event_id)
    }

    /// Mean rating across every comment; 0.0 when there are none.
    #[must_use]
    pub fn overall_average_rating(&self) -> f64 {
        ratings::overall_average_rating(self.snapshot)
    }

    /// Top `n` events by mean rating; zero-comment events are excluded.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidArgument`] for `n == 0` or `n` above the
    /// configured cap.
    pub fn top_rated_events(&self, n: usize) -> Result<Vec<RatedEvent>, StatsError> {
        self.check_limit(n)?;
        let ranked = ratings::top_rated_events(self.snapshot, n);
        debug!(requested = n, returned = ranked.len(), "ranked top-rated events");
        Ok(ranked)
    }

    /// Top `n` events by comment count.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidArgument`] for `n == 0` or `n` above the
    /// configured cap.
    pub fn most_commented_events(&self, n: usize) -> Result<Vec<CommentedEvent>, StatsError> {
        self.check_limit(n)?;
        let ranked = ratings::most_commented_events(self.snapshot, n);
        debug!(requested = n, returned = ranked.len(), "ranked most-commented events");
        Ok(ranked)
    }

    /// Top `n` events by purchased-ticket count.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidArgument`] for `n == 0` or `n` above the
    /// configured cap.
    pub fn best_selling_events(&self, n: usize) -> Result<Vec<EventSales>, StatsError> {
        self.check_limit(n)?;
        let ranked = sales::best_selling_events(self.snapshot, n);
        debug!(requested = n, returned = ranked.len(), "ranked best-selling events");
        Ok(ranked)
    }

    /// Purchased-ticket share per event type, in percent.
    ///
    /// Shares sum to 100 whenever any ticket was sold; with zero sales every
    /// present type reports 0.0.
    #[must_use]
    pub fn percentage_of_tickets_sold_by_type(&self) -> Vec<TypePercentage> {
        sales::percentage_of_tickets_sold_by_type(self.snapshot)
    }

    /// Top `n` users by number of events organized.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidArgument`] for `n == 0` or `n` above the
    /// configured cap.
    pub fn users_with_most_events(&self, n: usize) -> Result<Vec<OrganizerEvents>, StatsError> {
        self.check_limit(n)?;
        Ok(organizers::users_with_most_events(self.snapshot, n))
    }

    /// Top `n` users by purchased tickets across their events.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidArgument`] for `n == 0` or `n` above the
    /// configured cap.
    pub fn users_with_most_tickets_sold(
        &self,
        n: usize,
    ) -> Result<Vec<OrganizerSales>, StatsError> {
        self.check_limit(n)?;
        Ok(organizers::users_with_most_tickets_sold(self.snapshot, n))
    }
}

/// Loads a snapshot through a source and wraps it in an aggregation call.
///
/// Convenience for callers that do not keep the snapshot around: the closure
/// runs over a freshly loaded, validated snapshot.
///
/// # Errors
///
/// Returns [`StatsError::Snapshot`] if the load or the referential-integrity
/// check fails.
pub fn with_snapshot<S, T, F>(source: &S, f: F) -> Result<T, StatsError>
where
    S: RecordSource,
    F: FnOnce(Aggregator<'_>) -> T,
{
    let snapshot = StatsSnapshot::load(source)?;
    snapshot.validate()?;
    Ok(f(Aggregator::new(&snapshot)))
}
