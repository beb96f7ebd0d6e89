//! Ranking invariants.
//!
//! - Every retained score clears the threshold (inclusive).
//! - Result scores are non-increasing pairwise.
//! - Equal-score runs preserve event store order.
//! - Ranking twice over immutable inputs yields identical results.

use proptest::prelude::*;
use seas_alerts::testing::make_event;
use seas_alerts::{rank_events, Event, OverlapScorer, ScoredMatch};

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    proptest::collection::vec(
        ("[a-e ]{0,20}", "[a-e ]{0,40}").prop_map(|(title, description)| {
            make_event(&title, &description, "seas")
        }),
        0..12,
    )
}

/// Store-order index of a match within the original batch, resolved by
/// pointer identity so duplicate events stay distinguishable.
fn store_index(events: &[Event], m: &ScoredMatch<'_>) -> usize {
    events
        .iter()
        .position(|e| std::ptr::eq(e, m.event))
        .expect("match borrows from the batch")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// All retained scores are >= threshold, and ordering is non-increasing
    /// with ties in store order.
    #[test]
    fn prop_rank_contract(events in arb_events(), topic in "[a-e ]{0,12}", threshold in 0.0f64..=1.0) {
        let matches = rank_events(&events, &topic, threshold, &OverlapScorer).unwrap();

        for m in &matches {
            prop_assert!(m.score >= threshold);
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(
                    store_index(&events, &pair[0]) < store_index(&events, &pair[1]),
                    "tie broke store order"
                );
            }
        }
    }

    /// Idempotent over immutable inputs.
    #[test]
    fn prop_rank_idempotent(events in arb_events(), topic in "[a-e ]{0,12}", threshold in 0.0f64..=1.0) {
        let first = rank_events(&events, &topic, threshold, &OverlapScorer).unwrap();
        let second = rank_events(&events, &topic, threshold, &OverlapScorer).unwrap();
        prop_assert_eq!(first, second);
    }

    /// An event exactly at the threshold is retained; epsilon above the same
    /// score excludes it.
    #[test]
    fn prop_threshold_boundary_inclusive(events in arb_events(), topic in "[a-e]{1,6}") {
        let scored = rank_events(&events, &topic, 0.0, &OverlapScorer).unwrap();
        for m in &scored {
            let at = rank_events(&events, &topic, m.score, &OverlapScorer).unwrap();
            prop_assert!(at.iter().any(|kept| kept.score == m.score));

            let above = rank_events(&events, &topic, m.score + 1e-9, &OverlapScorer).unwrap();
            prop_assert!(above.iter().all(|kept| kept.score > m.score));
        }
    }

    /// Raising the threshold never adds results.
    #[test]
    fn prop_threshold_monotone(events in arb_events(), topic in "[a-e ]{0,12}", lo in 0.0f64..=1.0, hi in 0.0f64..=1.0) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let at_lo = rank_events(&events, &topic, lo, &OverlapScorer).unwrap();
        let at_hi = rank_events(&events, &topic, hi, &OverlapScorer).unwrap();
        prop_assert!(at_hi.len() <= at_lo.len());
    }
}
