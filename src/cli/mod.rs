// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sorted-search command-line interface.
//!
//! Two subcommands: `find` to search a list of integers given on the command
//! line, and `demo` to replay the reference scenarios. Either can run one
//! strategy or both side by side.

pub mod config;
pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use config::{Format, StrategyChoice};

#[derive(Parser)]
#[command(
    name = "sorted-search",
    about = "Iterative and recursive binary search over sorted integers",
    version
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<Format>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a sorted list for a target value
    Find {
        /// Sorted values, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        values: Vec<i64>,

        /// Value to look for
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        /// Strategy to run
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyChoice>,

        /// Inclusive lower bound of the window (default: 0)
        #[arg(long)]
        left: Option<usize>,

        /// Inclusive upper bound of the window (default: len - 1)
        ///
        /// Passing the length itself reproduces the one-past-the-end call,
        /// which is always rejected.
        #[arg(long)]
        right: Option<usize>,

        /// Skip the sortedness check (window bounds are still checked)
        #[arg(long)]
        no_validate: bool,

        /// Print every probe
        #[arg(long)]
        steps: bool,
    },

    /// Replay the reference scenarios and check their answers
    Demo {
        /// Strategy to run
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyChoice>,
    },
}
