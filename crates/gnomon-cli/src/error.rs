//! Error types for the Gnomon CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use gnomon::LayoutError;

/// The main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration file not found: {0}")]
    MissingConfig(PathBuf),

    #[error("configuration error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("events file error: {0}")]
    Events(#[from] serde_json::Error),

    #[error("invalid day start {0:?}, expected HH:MM")]
    InvalidDayStart(String),

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}
