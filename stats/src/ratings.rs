//! Rating and comment-volume statistics.
//!
//! Policy: events with zero comments are excluded from rating rankings
//! rather than ranked at 0. Asking for a specific event's average directly
//! still answers 0.0 when no comments exist ("no data" semantics, not an
//! error).

use crate::group::{group_by, mean_rating, take_top_by};
use event_insights_core::record::EventRecord;
use event_insights_core::snapshot::StatsSnapshot;
use event_insights_core::types::EventId;
use serde::Serialize;

/// One entry of the top-rated ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatedEvent {
    /// The rated event
    pub event: EventRecord,
    /// Mean of all ratings on the event
    pub average_rating: f64,
    /// How many comments produced that mean
    pub comment_count: usize,
}

/// One entry of the most-commented ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommentedEvent {
    /// The commented event
    pub event: EventRecord,
    /// Raw comment count
    pub comment_count: usize,
}

/// Mean rating of one event; 0.0 for an unknown event or one without
/// comments.
pub(crate) fn average_rating_for_event(snapshot: &StatsSnapshot, event_id: &EventId) -> f64 {
    let ratings: Vec<i32> = snapshot
        .comments()
        .iter()
        .filter(|comment| comment.event_id == *event_id)
        .map(|comment| comment.rating)
        .collect();
    mean_rating(&ratings)
}

/// Mean rating across every comment in the snapshot; 0.0 when there are
/// none.
pub(crate) fn overall_average_rating(snapshot: &StatsSnapshot) -> f64 {
    let ratings: Vec<i32> = snapshot.comments().iter().map(|c| c.rating).collect();
    mean_rating(&ratings)
}

/// Events ranked by mean rating, descending; only events with at least one
/// comment participate.
pub(crate) fn top_rated_events(snapshot: &StatsSnapshot, n: usize) -> Vec<RatedEvent> {
    let entries: Vec<RatedEvent> = group_by(snapshot.comments(), |comment| comment.event_id)
        .into_iter()
        .filter_map(|(event_id, comments)| {
            // Comments referencing an event absent from the snapshot carry
            // no event to report; skip them.
            let event = snapshot.event(&event_id)?;
            let ratings: Vec<i32> = comments.iter().map(|c| c.rating).collect();
            Some(RatedEvent {
                event: event.clone(),
                average_rating: mean_rating(&ratings),
                comment_count: comments.len(),
            })
        })
        .collect();

    take_top_by(entries, n, |a, b| {
        a.average_rating.total_cmp(&b.average_rating)
    })
}

/// Events ranked by raw comment count, descending.
pub(crate) fn most_commented_events(snapshot: &StatsSnapshot, n: usize) -> Vec<CommentedEvent> {
    let entries: Vec<CommentedEvent> = group_by(snapshot.comments(), |comment| comment.event_id)
        .into_iter()
        .filter_map(|(event_id, comments)| {
            let event = snapshot.event(&event_id)?;
            Some(CommentedEvent {
                event: event.clone(),
                comment_count: comments.len(),
            })
        })
        .collect();

    take_top_by(entries, n, |a, b| a.comment_count.cmp(&b.comment_count))
}
