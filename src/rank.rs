// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! Threshold filtering and stable descending sort.
//!
//! The contract, in order:
//!
//! 1. Score every event in store order.
//! 2. Keep `score >= threshold` - the boundary is inclusive, an event exactly
//!    at the threshold stays.
//! 3. Sort descending by score with a *stable* sort, so equal scores keep
//!    their store order. `Vec::sort_by` is stable and `f64::total_cmp` gives
//!    a total order, so no tie can be reordered and no NaN can panic us.
//!
//! A run with zero survivors is a success with an empty result, not an error.
//! A scoring failure is the opposite: the whole run aborts on the first one,
//! because a report silently missing the events that failed to score is worse
//! than no report.
//!
//! With the `parallel` feature the scoring map runs on the rayon pool. The
//! indexed collect preserves store order and the filter/sort happen only after
//! every score is known, so thread scheduling can never change the output.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::scoring::{ScoreError, Scorer};
use crate::types::{Event, ScoredMatch};

/// Score, filter and sort `events` by relevance to `topic`.
///
/// Returns matches in descending score order; ties preserve the order of
/// `events`. The score range (and therefore a sensible `threshold`) depends
/// on the scorer - see [`crate::scoring`].
///
/// # Errors
///
/// Propagates the first [`ScoreError`] and aborts the run. No partial result
/// is ever returned.
pub fn rank_events<'a, S: Scorer + ?Sized>(
    events: &'a [Event],
    topic: &str,
    threshold: f64,
    scorer: &S,
) -> Result<Vec<ScoredMatch<'a>>, ScoreError> {
    let scores = score_all(events, topic, scorer)?;

    let mut matches: Vec<ScoredMatch<'a>> = events
        .iter()
        .zip(scores)
        .filter(|(_, score)| *score >= threshold)
        .map(|(event, score)| ScoredMatch { event, score })
        .collect();

    // Stable: equal scores keep store order.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(matches)
}

#[cfg(feature = "parallel")]
fn score_all<S: Scorer + ?Sized>(
    events: &[Event],
    topic: &str,
    scorer: &S,
) -> Result<Vec<f64>, ScoreError> {
    events
        .par_iter()
        .map(|event| scorer.score(topic, event))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<S: Scorer + ?Sized>(
    events: &[Event],
    topic: &str,
    scorer: &S,
) -> Result<Vec<f64>, ScoreError> {
    events
        .iter()
        .map(|event| scorer.score(topic, event))
        .collect()
}
