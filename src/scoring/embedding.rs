// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! Embedding-cosine scoring: the semantic, model-backed strategy.
//!
//! Texts are encoded into fixed-length vectors by an injected [`Embedder`]
//! and compared with cosine similarity. Unlike token overlap, this matches
//! meaning rather than spelling: "neural networks" lands near a deep-learning
//! seminar even with zero shared tokens.
//!
//! The provider is a port, not a global. Construct it once at startup, pass
//! it in, and substitute a deterministic stub in tests. Embedding calls are
//! the expensive part of a run (one per distinct text), so the scorer caches
//! vectors per text for its lifetime - scoring the same batch against a
//! second topic costs one new embedding, not N.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::scoring::{ScoreError, Scorer};
use crate::types::Event;

/// An external text-embedding provider.
///
/// Must be deterministic for identical input and safe to call from multiple
/// threads. The core has no timeout or retry logic; implementations either
/// return or fail outright, and timeouts belong to whatever transport they
/// wrap.
pub trait Embedder: Sync {
    /// Encode `text` into a fixed-length real-valued vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, ScoreError>;
}

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Fails with [`ScoreError::ZeroNorm`] rather than producing NaN when either
/// vector has zero magnitude; `label` names the offending text in the error.
fn cosine_similarity(a: &[f32], b: &[f32], label: &str) -> Result<f64, ScoreError> {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(ScoreError::ZeroNorm {
            text: label.to_string(),
        });
    }
    Ok(dot / (norm_a * norm_b))
}

/// The sentence the embedder sees for an event.
///
/// Field order and punctuation are fixed: changing them changes every cached
/// vector and every score.
pub fn embedding_text(event: &Event) -> String {
    format!(
        "{}. {}. Hosted by {}.",
        event.title, event.description, event.organization
    )
}

/// Cosine-similarity scorer over an injected [`Embedder`].
pub struct EmbeddingScorer<E> {
    embedder: E,
    // Keyed by exact input text; events repeat across topics in a long-lived
    // process, topics repeat across batches.
    cache: Mutex<HashMap<String, Arc<[f32]>>>,
}

impl<E: Embedder> EmbeddingScorer<E> {
    pub fn new(embedder: E) -> Self {
        EmbeddingScorer {
            embedder,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Embed `text`, going to the provider only on a cache miss.
    fn embed_cached(&self, text: &str) -> Result<Arc<[f32]>, ScoreError> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(vector) = cache.get(text) {
                return Ok(Arc::clone(vector));
            }
        }

        let vector: Arc<[f32]> = self.embedder.embed(text)?.into();

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(text.to_string(), Arc::clone(&vector));
        }
        Ok(vector)
    }

    /// Number of distinct texts embedded so far. Exposed for tests.
    #[doc(hidden)]
    pub fn cached_texts(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl<E: Embedder> Scorer for EmbeddingScorer<E> {
    /// Score in [-1, 1].
    ///
    /// An empty or whitespace-only topic is an explicit failure: there is no
    /// meaningful vector for it, and silently embedding `""` would produce an
    /// arbitrary ranking.
    fn score(&self, topic: &str, event: &Event) -> Result<f64, ScoreError> {
        if topic.trim().is_empty() {
            return Err(ScoreError::EmptyTopic);
        }

        let text = embedding_text(event);
        let topic_vec = self.embed_cached(topic)?;
        let event_vec = self.embed_cached(&text)?;
        cosine_similarity(&topic_vec, &event_vec, &text)
    }
}
