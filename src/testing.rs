//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::scoring::embedding::Embedder;
use crate::scoring::{ScoreError, Scorer};
use crate::types::Event;

/// Create a test event with placeholder time/location and no link.
///
/// This is the canonical implementation used across all tests.
pub fn make_event(title: &str, description: &str, organization: &str) -> Event {
    Event {
        title: title.to_string(),
        description: description.to_string(),
        start_time: "TBD".to_string(),
        location: "TBD".to_string(),
        organization: organization.to_string(),
        link: String::new(),
    }
}

/// Create a fully specified test event.
pub fn make_event_full(
    title: &str,
    description: &str,
    start_time: &str,
    location: &str,
    organization: &str,
    link: &str,
) -> Event {
    Event {
        title: title.to_string(),
        description: description.to_string(),
        start_time: start_time.to_string(),
        location: location.to_string(),
        organization: organization.to_string(),
        link: link.to_string(),
    }
}

/// Deterministic embedding provider for tests.
///
/// Maps text to an 8-dimensional vector derived from its bytes: identical
/// texts always embed identically, distinct texts almost always differ, and
/// non-empty texts never have zero norm. Counts provider calls so cache
/// behavior is observable.
pub struct StubEmbedder {
    calls: AtomicUsize,
    failure: Option<String>,
}

impl StubEmbedder {
    pub fn new() -> Self {
        StubEmbedder {
            calls: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// A stub whose every call fails, for provider-outage paths.
    pub fn failing(message: &str) -> Self {
        StubEmbedder {
            calls: AtomicUsize::new(0),
            failure: Some(message.to_string()),
        }
    }

    /// Number of `embed` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, ScoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(ScoreError::Provider {
                message: message.clone(),
            });
        }

        let mut v = [0.0f32; 8];
        for (i, b) in text.bytes().enumerate() {
            v[i % 8] += f32::from(b) / 255.0;
        }
        Ok(v.to_vec())
    }
}

/// Scorer returning a fixed value, optionally failing after N calls.
///
/// Used to exercise the ranker's abort-on-failure policy without involving
/// real scoring.
pub struct FixedScorer {
    value: f64,
    fail_after: Option<usize>,
    calls: AtomicUsize,
}

impl FixedScorer {
    pub fn new(value: f64) -> Self {
        FixedScorer {
            value,
            fail_after: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Succeeds for the first `n` calls, then fails every call.
    pub fn failing_after(n: usize) -> Self {
        FixedScorer {
            value: 1.0,
            fail_after: Some(n),
            calls: AtomicUsize::new(0),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _topic: &str, _event: &Event) -> Result<f64, ScoreError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(n) = self.fail_after {
            if call >= n {
                return Err(ScoreError::Provider {
                    message: "stub scorer failure".to_string(),
                });
            }
        }
        Ok(self.value)
    }
}
