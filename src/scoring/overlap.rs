// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! Token-overlap scoring: the deterministic, offline-safe strategy.
//!
//! The score is the fraction of *topic* tokens that appear anywhere in the
//! event's combined text:
//!
//! ```text
//! score = |tokenize(topic) ∩ tokenize(event_text)| / |tokenize(topic)|
//! ```
//!
//! The denominator is deliberately the topic size, not the union or the event
//! size. A two-word topic fully contained in a long event description scores
//! 1.0 regardless of how much other text the event carries - we are asking
//! "how much of what the user wants does this event mention", not "how much
//! of this event is about the topic".
//!
//! # Worked example
//!
//! Topic `"ai ethics"` normalizes to `{ai, ethics}`. An event titled
//! "AI Ethics and Accountability" contains both tokens: score 2/2 = 1.0.
//! A classical music recital contains neither: score 0/2 = 0.0.

use crate::scoring::{ScoreError, Scorer};
use crate::tokenize::{event_text, tokenize};
use crate::types::Event;

/// The token-overlap ratio scorer. Stateless and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapScorer;

impl OverlapScorer {
    pub fn new() -> Self {
        OverlapScorer
    }
}

impl Scorer for OverlapScorer {
    /// Score in [0, 1]. A topic that normalizes to nothing scores 0.0 for
    /// every event rather than failing - the degenerate-topic policy for this
    /// strategy.
    fn score(&self, topic: &str, event: &Event) -> Result<f64, ScoreError> {
        let topic_tokens = tokenize(topic);
        if topic_tokens.is_empty() {
            return Ok(0.0);
        }

        let words = tokenize(&event_text(event));
        let overlap = topic_tokens.intersection(&words).count();
        Ok(overlap as f64 / topic_tokens.len() as f64)
    }
}
