// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of an event alert run.
//!
//! An [`Event`] is whatever a source (JSON file, live calendar scrape) hands us:
//! six free-form strings, constructed once and never mutated by the ranking
//! core. A [`ScoredMatch`] pairs a borrowed event with its relevance score for
//! one topic; it lives only as long as the ranking run that produced it.
//!
//! # Invariants
//!
//! - `start_time` and `location` are display text, not parsed dates or places.
//!   Sources that cannot determine them substitute `"TBD"`.
//! - An empty `link` means "no detail page", not an error.
//! - Duplicate titles across a batch are allowed; events have no identity
//!   beyond value equality.

use serde::{Deserialize, Serialize};

/// A single calendar listing.
///
/// Missing fields in serialized input are a deserialization error, never
/// silently defaulted - the tolerance for partial data lives in the scraping
/// adapter, which substitutes placeholders *before* constructing an `Event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    /// Free-form date/time text, e.g. "Tue, Oct 14, 4:00pm" or "TBD".
    pub start_time: String,
    /// Free-form location text, e.g. "SEC LL2.224" or "TBD".
    pub location: String,
    pub organization: String,
    /// Absolute URL of the detail page; empty when there is none.
    pub link: String,
}

/// An event paired with its relevance score against one topic.
///
/// Produced by [`rank_events`](crate::rank_events), consumed by
/// [`compose_report`](crate::compose_report). Borrowed from the event batch,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch<'a> {
    pub event: &'a Event,
    /// [0, 1] under the overlap scorer, [-1, 1] under the embedding scorer.
    pub score: f64,
}
