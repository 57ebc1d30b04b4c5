// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Sniff.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sniff - browser, OS, and feature detection for client environment snapshots
#[derive(Parser, Debug)]
#[command(name = "sniff")]
#[command(version, about = "Classify client environments by OS, browser, and features")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an environment snapshot
    Detect(DetectArgs),

    /// Print the style-class toggles an environment implies
    Classes(ClassesArgs),

    /// Print a template environment snapshot to fill in
    Snapshot,
}

/// Source of the environment to classify
#[derive(clap::Args, Debug, Default)]
pub struct DetectArgs {
    /// Path to an environment snapshot JSON file ("-" for stdin)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Classify from a bare user-agent string instead of a snapshot
    #[arg(short = 'u', long)]
    pub user_agent: Option<String>,
}

/// Arguments for the classes subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ClassesArgs {
    /// Path to an environment snapshot JSON file ("-" for stdin)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Classify from a bare user-agent string instead of a snapshot
    #[arg(short = 'u', long)]
    pub user_agent: Option<String>,

    /// Class attribute value to apply the toggles to (e.g. "noJs noTouch")
    #[arg(short, long)]
    pub base: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}
