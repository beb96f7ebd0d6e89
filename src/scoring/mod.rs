// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring strategies.
//!
//! Two strategies live behind one [`Scorer`] trait and are never mixed inside
//! a single ranking run - their scores are not numerically comparable:
//!
//! | Scorer                                  | Range   | Needs            |
//! |-----------------------------------------|---------|------------------|
//! | [`OverlapScorer`](overlap::OverlapScorer) | [0, 1]  | nothing (offline) |
//! | [`EmbeddingScorer`](embedding::EmbeddingScorer) | [-1, 1] | an [`Embedder`](embedding::Embedder) |
//!
//! The overlap scorer is the default: deterministic, dependency-free, cheap.
//! The embedding scorer trades that for semantic matching ("neural networks"
//! finds a deep-learning talk) at the cost of one provider call per distinct
//! text.

pub mod embedding;
pub mod overlap;

use std::error::Error;
use std::fmt;

use crate::types::Event;

/// A relevance scoring strategy for one topic against one event.
///
/// Implementations must be deterministic for identical inputs and must not
/// mutate shared state visible to callers - ranking may invoke `score` from
/// multiple threads.
pub trait Scorer: Sync {
    /// Score how relevant `event` is to `topic`.
    ///
    /// The range depends on the strategy; see the module table. A failure
    /// aborts the whole ranking run, so implementations should only fail for
    /// conditions the caller must hear about (provider outage, degenerate
    /// input the strategy cannot define a score for) - never for "no match",
    /// which is a low score, not an error.
    fn score(&self, topic: &str, event: &Event) -> Result<f64, ScoreError>;
}

/// Why a scoring call failed.
///
/// Distinct from "no matches found", which is a valid zero-result success and
/// never surfaces as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Topic normalized to nothing; the embedding strategy cannot assume an
    /// empty string embeds meaningfully.
    EmptyTopic,
    /// An embedding vector had zero norm, so cosine similarity is undefined.
    ZeroNorm { text: String },
    /// The embedding provider failed outright.
    Provider { message: String },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::EmptyTopic => {
                write!(f, "topic is empty after normalization")
            }
            ScoreError::ZeroNorm { text } => {
                write!(
                    f,
                    "embedding has zero norm, cosine similarity undefined for {:?}",
                    text
                )
            }
            ScoreError::Provider { message } => {
                write!(f, "embedding provider failed: {}", message)
            }
        }
    }
}

impl Error for ScoreError {}
