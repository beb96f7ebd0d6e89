// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! Where events come from.
//!
//! The ranking core knows nothing about HTML, selectors or site URLs; it
//! consumes a `Vec<Event>` from an [`EventSource`]. Two sources ship:
//!
//! - [`json::JsonFileSource`] - a JSON array of six-field event objects,
//!   fail-fast on anything malformed;
//! - `scrape::SeasCalendarSource` (feature `scrape`) - the live SEAS calendar
//!   adapter, tolerant of partial HTML and degrading to an empty batch when
//!   the site is unreachable.
//!
//! The error postures are intentionally opposite. A JSON file the user named
//! is a contract: a missing field is their bug and we say so. A third-party
//! Drupal theme is weather: we take what we can parse and log the rest.

pub mod json;

#[cfg(feature = "scrape")]
pub mod scrape;

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::types::Event;

/// A producer of event batches.
///
/// The natural seam for substitution: tests inject fixtures, the CLI picks
/// file or live scrape, future adapters add other calendars without the core
/// noticing.
pub trait EventSource {
    /// Produce the events to rank, in source order.
    fn fetch(&self) -> Result<Vec<Event>, LoadError>;
}

/// Why a source failed to produce events.
#[derive(Debug)]
pub enum LoadError {
    /// The events file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The events file was not a valid array of complete event records.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Live scraping is not compiled in or no input mode was selected.
    NoSource,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read events file {}: {}", path.display(), source)
            }
            LoadError::Json { path, source } => {
                write!(
                    f,
                    "invalid events JSON in {}: {}",
                    path.display(),
                    source
                )
            }
            LoadError::NoSource => {
                write!(
                    f,
                    "no event source: pass --events-json <path>, or rebuild with the \
                     'scrape' feature for live calendar fetching"
                )
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json { source, .. } => Some(source),
            LoadError::NoSource => None,
        }
    }
}
