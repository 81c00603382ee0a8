//! Property-based tests for the aggregation invariants.

#![allow(clippy::unwrap_used)]

use event_insights_stats::Aggregator;
use event_insights_testing::{SnapshotBuilder, strategies};
use proptest::prelude::*;

/// One generated event with its comments and ticket allocation.
#[derive(Clone, Debug)]
struct EventSpec {
    year: i32,
    event_type: event_insights_core::types::EventType,
    ratings: Vec<i32>,
    purchased: usize,
    unsold: usize,
}

fn event_spec() -> impl Strategy<Value = EventSpec> {
    (
        strategies::year(),
        strategies::event_type(),
        prop::collection::vec(strategies::rating(), 0..6),
        0..5usize,
        0..5usize,
    )
        .prop_map(|(year, event_type, ratings, purchased, unsold)| EventSpec {
            year,
            event_type,
            ratings,
            purchased,
            unsold,
        })
}

fn build_snapshot(specs: &[EventSpec]) -> event_insights_core::snapshot::StatsSnapshot {
    let mut builder = SnapshotBuilder::new();
    let user = builder.user("organizer");
    for (index, spec) in specs.iter().enumerate() {
        let event = builder.event(&format!("event-{index}"), spec.year, spec.event_type, user);
        builder.comments(event, &spec.ratings);
        builder.purchased_tickets(event, spec.purchased);
        builder.unsold_tickets(event, spec.unsold);
    }
    builder.build()
}

proptest! {
    #[test]
    fn percentages_sum_to_100_or_all_zero(specs in prop::collection::vec(event_spec(), 0..12)) {
        let snapshot = build_snapshot(&specs);
        let shares = Aggregator::new(&snapshot).percentage_of_tickets_sold_by_type();

        let any_sold = shares.iter().any(|s| s.tickets_sold > 0);
        let total: f64 = shares.iter().map(|s| s.percentage).sum();

        if any_sold {
            prop_assert!((total - 100.0).abs() < 1e-6);
        } else {
            for share in &shares {
                prop_assert!(share.percentage == 0.0);
            }
        }
        prop_assert!(shares.iter().all(|s| !s.percentage.is_nan()));
    }

    #[test]
    fn per_year_counts_sum_to_events_of_that_year(specs in prop::collection::vec(event_spec(), 0..12)) {
        let snapshot = build_snapshot(&specs);
        let years = Aggregator::new(&snapshot).event_types_by_year();

        for breakdown in &years {
            let expected = snapshot
                .events()
                .iter()
                .filter(|e| e.start_year() == breakdown.year)
                .count();
            prop_assert_eq!(breakdown.total(), expected);
        }

        // Years are strictly descending, so no year appears twice.
        prop_assert!(years.windows(2).all(|w| w[0].year > w[1].year));
    }

    #[test]
    fn top_rated_is_sorted_and_bounded(
        specs in prop::collection::vec(event_spec(), 0..12),
        n in 1..10usize,
    ) {
        let snapshot = build_snapshot(&specs);
        let top = Aggregator::new(&snapshot).top_rated_events(n).unwrap();

        prop_assert!(top.len() <= n);
        prop_assert!(top.windows(2).all(|w| w[0].average_rating >= w[1].average_rating));
        // Zero-comment events never participate.
        prop_assert!(top.iter().all(|entry| entry.comment_count > 0));
    }

    #[test]
    fn oversized_n_is_clamped_without_error(specs in prop::collection::vec(event_spec(), 0..8)) {
        let snapshot = build_snapshot(&specs);
        let aggregator = Aggregator::new(&snapshot);

        let commented = snapshot
            .comments()
            .iter()
            .map(|c| c.event_id)
            .collect::<std::collections::HashSet<_>>()
            .len();

        let ranked = aggregator.most_commented_events(100).unwrap();
        prop_assert_eq!(ranked.len(), commented);
    }

    #[test]
    fn best_selling_counts_match_purchased_tickets(specs in prop::collection::vec(event_spec(), 0..8)) {
        let snapshot = build_snapshot(&specs);
        let ranked = Aggregator::new(&snapshot).best_selling_events(100).unwrap();

        let total_ranked: usize = ranked.iter().map(|e| e.tickets_sold).sum();
        let total_purchased = snapshot.tickets().iter().filter(|t| t.purchased).count();
        prop_assert_eq!(total_ranked, total_purchased);
        prop_assert!(ranked.iter().all(|e| e.tickets_sold > 0));
    }
}
