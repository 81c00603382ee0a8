//! Aggregator configuration.

use serde::{Deserialize, Serialize};

/// Tunable limits for the aggregation engine.
///
/// Loaded alongside the application's configuration; the `Default` values
/// match what the query layer advertises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Largest `n` a ranking operation accepts. Requests above the cap are
    /// rejected as invalid rather than silently truncated; requests above the
    /// number of available groups (but within the cap) return all groups.
    #[serde(default = "default_max_ranking_limit")]
    pub max_ranking_limit: usize,
}

const fn default_max_ranking_limit() -> usize {
    100
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_ranking_limit: default_max_ranking_limit(),
        }
    }
}
