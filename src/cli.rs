// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::format::DisplayFormat;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "earth-rotation")]
#[command(about = "Counts the Earth's sidereal rotations since 0001-01-01 UTC")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Rotation display format (overrides config)
    #[arg(long, global = true, value_enum)]
    pub format: Option<DisplayFormat>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Show the current time and rotation count
    Now,

    /// Live counter refreshed every second
    Watch {
        /// Stop after this many updates
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Rotation count at a timestamp (RFC 3339 or YYYY-MM-DD)
    At { timestamp: String },

    /// Timestamp at which a rotation count is reached
    Date {
        #[arg(allow_negative_numbers = true)]
        rotations: f64,
    },

    /// Generate a taunt phrase
    Taunt {
        /// Timestamp to taunt about instead of now
        #[arg(long)]
        at: Option<String>,

        /// Read the date in UTC instead of the configured zone
        #[arg(long, conflicts_with = "local")]
        utc: bool,

        /// Read the date in local time instead of the configured zone
        #[arg(long)]
        local: bool,

        /// Copy the phrase to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Switch the saved display format between integer and decimal
    Toggle,
}
