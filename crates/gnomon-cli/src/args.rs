//! Command-line argument definitions for the Gnomon CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the day anchor, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Gnomon layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input events file (JSON array of {id, start, end})
    #[arg(help = "Path to the input events file")]
    pub input: String,

    /// Path to the output layout file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Timestamp the top of the track maps to, as HH:MM
    #[arg(long, default_value = "00:00")]
    pub day_start: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
