// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! Plain-text report rendering.
//!
//! The report is deliberately boring: a header naming the topic, one indented
//! block per match, blank lines between blocks. Scores print with exactly two
//! decimal places. No color, no wrapping - styling is the CLI's business
//! ([`crate::cli::display`]), and piping the report into `grep` or an email
//! body must stay trivial.

use std::fmt::Write;

use crate::types::ScoredMatch;

/// Render ranked matches as a human-readable text block.
///
/// An empty `matches` slice produces the single no-results line; the caller
/// decides whether that is worth printing, but it is a success, not an error.
pub fn compose_report(topic: &str, matches: &[ScoredMatch<'_>]) -> String {
    if matches.is_empty() {
        return format!("No relevant SEAS events found for topic: {}\n", topic);
    }

    let mut out = String::new();
    let _ = writeln!(out, "SEAS events relevant to '{}':", topic);
    let _ = writeln!(out);

    for m in matches {
        let _ = writeln!(out, "- {}", m.event.title);
        let _ = writeln!(out, "  Relevance score: {:.2}", m.score);
        let _ = writeln!(out, "  Date/Time: {}", m.event.start_time);
        let _ = writeln!(out, "  Location: {}", m.event.location);
        let _ = writeln!(out, "  Organization: {}", m.event.organization);
        let _ = writeln!(out, "  Link: {}", m.event.link);
        let _ = writeln!(out);
    }

    out
}
