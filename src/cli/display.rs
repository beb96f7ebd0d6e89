// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling helpers for the seas-alerts CLI.
//!
//! The report body itself is plain text ([`crate::compose_report`]); styling
//! is confined to the surrounding chrome (count line, banner). Respects
//! `NO_COLOR` and non-TTY stdout, so piping into `grep` or a file yields
//! clean text.

use std::sync::OnceLock;

/// Cached "should we style output" decision.
static STYLED: OnceLock<bool> = OnceLock::new();

/// Whether stdout gets ANSI styling: TTY and `NO_COLOR` unset.
pub fn use_style() -> bool {
    *STYLED.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

/// Bold when styling is on, unchanged otherwise.
pub fn bold(text: &str) -> String {
    if use_style() {
        format!("\x1b[1m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}

/// Dim when styling is on, unchanged otherwise.
pub fn dim(text: &str) -> String {
    if use_style() {
        format!("\x1b[2m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}

/// The report banner printed between the count line and the body.
pub fn banner() -> String {
    bold("--- EVENT REPORT ---")
}
