//! Ranking behavior through the public API.

use seas_alerts::testing::{make_event, FixedScorer};
use seas_alerts::{rank_events, OverlapScorer};

use crate::common::sample_events;

#[test]
fn returns_only_events_at_or_above_threshold() {
    let events = sample_events();
    let matches = rank_events(&events, "ai ethics", 0.5, &OverlapScorer).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].event.title, "AI Ethics and Accountability");
    assert_eq!(matches[0].score, 1.0);
}

#[test]
fn threshold_zero_keeps_everything() {
    let events = sample_events();
    let matches = rank_events(&events, "ai ethics", 0.0, &OverlapScorer).unwrap();
    assert_eq!(matches.len(), events.len());
}

#[test]
fn empty_batch_ranks_to_empty() {
    let matches = rank_events(&[], "ai ethics", 0.3, &OverlapScorer).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn no_survivors_is_success_not_error() {
    let events = sample_events();
    let matches = rank_events(&events, "underwater basket weaving", 0.3, &OverlapScorer).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn scores_are_non_increasing() {
    let events = vec![
        make_event("Concert", "Music only.", "SEAS"),
        make_event("AI and Robotics", "Both topics.", "SEAS"),
        make_event("AI Talk", "Just the one.", "SEAS"),
    ];
    let matches = rank_events(&events, "ai robotics", 0.0, &OverlapScorer).unwrap();
    for pair in matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(matches[0].event.title, "AI and Robotics");
}

#[test]
fn equal_scores_keep_store_order_b_before_a() {
    // Store order is [B, A]; both score 0.75 against the topic (three of
    // four topic tokens each).
    let events = vec![
        make_event("B: neural networks ethics", "", "SEAS"),
        make_event("A: neural networks ethics", "", "SEAS"),
    ];
    let matches =
        rank_events(&events, "neural networks ethics policy", 0.5, &OverlapScorer).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].score, 0.75);
    assert_eq!(matches[1].score, 0.75);
    assert!(matches[0].event.title.starts_with("B:"));
    assert!(matches[1].event.title.starts_with("A:"));
}

#[test]
fn all_equal_scores_preserve_full_store_order() {
    let events: Vec<_> = (0..10)
        .map(|i| make_event(&format!("Event {}", i), "", "SEAS"))
        .collect();
    let matches = rank_events(&events, "anything", 0.5, &FixedScorer::new(0.75)).unwrap();
    let titles: Vec<_> = matches.iter().map(|m| m.event.title.as_str()).collect();
    let expected: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, expected);
}

#[test]
fn one_failing_score_aborts_the_whole_run() {
    let events = vec![
        make_event("First", "", "SEAS"),
        make_event("Second", "", "SEAS"),
        make_event("Third", "", "SEAS"),
    ];
    assert!(rank_events(&events, "x", 0.0, &FixedScorer::failing_after(2)).is_err());
}
