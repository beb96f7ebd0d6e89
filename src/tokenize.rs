//! Text normalization for the token-overlap scorer.
//!
//! This is a deliberately lossy bag-of-words model: lowercase, strip a fixed
//! set of separator punctuation, split on whitespace, collapse duplicates.
//! No stemming, no stop-words, no phrases. "AI/ML, ethics." and "ai ml ethics"
//! normalize to the same token set.
//!
//! Only `/`, `,`, `.` and `-` become whitespace. Other punctuation stays
//! attached to its word ("ethics!" is the token `ethics!`), which keeps the
//! behavior predictable rather than clever.

use std::collections::HashSet;

use crate::types::Event;

/// Characters treated as word separators in addition to whitespace.
const SEPARATORS: &[char] = &['/', ',', '.', '-'];

/// Normalize text into a set of lowercase tokens.
///
/// Empty or whitespace-only input yields an empty set.
///
/// # Example
///
/// ```
/// use seas_alerts::tokenize;
///
/// let tokens = tokenize("AI/ML, Ethics.");
/// assert!(tokens.contains("ai"));
/// assert!(tokens.contains("ml"));
/// assert!(tokens.contains("ethics"));
/// ```
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .replace(SEPARATORS, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Combine the searchable fields of an event into one text blob.
///
/// Field order is title, description, organization, joined by single spaces.
/// `start_time`, `location` and `link` are intentionally excluded - dates and
/// URLs produce junk tokens that dilute the overlap ratio.
pub fn event_text(event: &Event) -> String {
    format!(
        "{} {} {}",
        event.title, event.description, event.organization
    )
}
