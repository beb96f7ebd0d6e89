// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! File-backed event source: a JSON array of event objects.
//!
//! The expected shape is exactly what [`crate::Event`] serializes to:
//!
//! ```json
//! [
//!   {
//!     "title": "AI Ethics Panel",
//!     "description": "...",
//!     "start_time": "Tue, Oct 14, 4:00pm",
//!     "location": "SEC LL2.224",
//!     "organization": "Harvard SEAS",
//!     "link": "https://events.seas.harvard.edu/event/ai-ethics"
//!   }
//! ]
//! ```
//!
//! Malformed JSON or a record missing any field fails the load with the path
//! in the message. This is the curated-input path, so there is no "TBD"
//! substitution here - if the file is wrong, fix the file.

use std::fs;
use std::path::PathBuf;

use crate::source::{EventSource, LoadError};
use crate::types::Event;

/// Loads events from a JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }
}

impl EventSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Event>, LoadError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| LoadError::Json {
            path: self.path.clone(),
            source,
        })
    }
}
