//! Topic-based relevance ranking for Harvard SEAS calendar events.
//!
//! Events come in from a source (JSON file or live calendar scrape), get
//! scored against a free-text topic, and come out as a ranked plain-text
//! report. The ranking core is deliberately small and deterministic; the
//! scraping adapter is deliberately quarantined behind a trait.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//! │  source/     │────▶│   rank.rs     │────▶│  report.rs  │
//! │ (EventSource:│     │ (rank_events: │     │ (compose_   │
//! │  json, scrape)│    │  filter+sort) │     │   report)   │
//! └──────────────┘     └───────┬───────┘     └─────────────┘
//!                              │ score()
//!                              ▼
//!                      ┌───────────────┐     ┌──────────────┐
//!                      │  scoring/     │────▶│ tokenize.rs  │
//!                      │ (Scorer:      │     │ (token model,│
//!                      │  overlap,     │     │  overlap only)│
//!                      │  embedding)   │     └──────────────┘
//!                      └───────────────┘
//! ```
//!
//! # Scoring strategies
//!
//! Two [`Scorer`] implementations ship and are never mixed within one run:
//! [`OverlapScorer`] (token-overlap ratio, [0, 1], offline, the default) and
//! [`EmbeddingScorer`] (cosine similarity over an injected [`Embedder`],
//! [-1, 1]). Thresholds are only meaningful relative to one strategy.
//!
//! # Usage
//!
//! ```
//! use seas_alerts::{compose_report, rank_events, Event, OverlapScorer};
//!
//! let events = vec![Event {
//!     title: "AI Ethics and Accountability".to_string(),
//!     description: "Machine learning and civil rights.".to_string(),
//!     start_time: "TBD".to_string(),
//!     location: "TBD".to_string(),
//!     organization: "Harvard SEAS".to_string(),
//!     link: String::new(),
//! }];
//!
//! let matches = rank_events(&events, "ai ethics", 0.5, &OverlapScorer).unwrap();
//! assert_eq!(matches.len(), 1);
//! println!("{}", compose_report("ai ethics", &matches));
//! ```

pub mod cli;
pub mod rank;
pub mod report;
pub mod scoring;
pub mod source;
pub mod tokenize;
pub mod types;

pub mod testing;

// Re-exports for the public API
pub use rank::rank_events;
pub use report::compose_report;
pub use scoring::embedding::{embedding_text, Embedder, EmbeddingScorer};
pub use scoring::overlap::OverlapScorer;
pub use scoring::{ScoreError, Scorer};
pub use source::json::JsonFileSource;
pub use source::{EventSource, LoadError};
pub use tokenize::{event_text, tokenize};
pub use types::{Event, ScoredMatch};

#[cfg(feature = "scrape")]
pub use source::scrape::SeasCalendarSource;
