//! CLI configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use gnomon::config::TrackConfig;

use crate::error::CliError;

/// Application configuration loaded from a TOML file.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AppConfig {
    /// Track geometry section
    #[serde(default)]
    pub track: TrackConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CliError::MissingConfig(PathBuf::from(path)));
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Resolves the effective configuration: the given file, or defaults when no
/// file was specified.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, CliError> {
    match path {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    }
}
