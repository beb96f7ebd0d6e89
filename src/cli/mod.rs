// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seas-alerts command-line interface.
//!
//! One command, no subcommands: score a batch of events against a topic and
//! print the ranked report. The batch comes from `--events-json` when given,
//! otherwise from a live calendar scrape (requires the `scrape` build
//! feature).

pub mod display;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "seas-alerts",
    about = "Topic-based relevance ranking for Harvard SEAS calendar events",
    version
)]
pub struct Cli {
    /// Topic to match, e.g. "ai ethics" or "robotics"
    #[arg(long)]
    pub topic: String,

    /// Minimum relevance score [0-1] to include an event
    #[arg(long, default_value_t = 0.3)]
    pub threshold: f64,

    /// Path to an events JSON file (omit to scrape the live calendar)
    #[arg(long, value_name = "PATH")]
    pub events_json: Option<PathBuf>,

    /// Maximum number of events to take from the live calendar
    #[arg(long, default_value_t = 30)]
    pub limit: usize,

    /// Enable verbose logging (repeat for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
