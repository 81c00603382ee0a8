//! Error type for aggregation calls.

use event_insights_core::snapshot::SnapshotError;
use event_insights_core::source::SourceError;
use thiserror::Error;

/// Errors returned by [`crate::Aggregator`] operations.
///
/// Aggregation over an empty snapshot is not an error: the operations return
/// empty or zero results for "no data". Arithmetic is guarded so a zero
/// denominator resolves to 0, never NaN.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The caller asked for something unsatisfiable (bad `n`, malformed
    /// filter)
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },
    /// Loading the snapshot failed at the source
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The snapshot failed to load or validate
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl StatsError {
    /// Shorthand for an [`StatsError::InvalidArgument`]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
