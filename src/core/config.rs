//! Configuration management for folio.
//!
//! This module handles loading configuration from TOML files with
//! sensible defaults for all settings. CLI flags override whatever
//! the file provides; the file path comes from `--config` or the
//! `FOLIO_CONFIG` environment variable.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{FolioError, Result};

/// Environment variable naming an alternate config file
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Pagination configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Number of text lines per logical page
    #[serde(default = "default_lines_per_page", rename = "lines-per-page")]
    pub lines_per_page: u64,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Rendering used for the finished index
    #[serde(default)]
    pub format: RenderFormat,
}

/// Rendering variants for the finished index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Classic `word:\tpages` listing
    #[default]
    Text,
    /// JSON object mapping word to page array
    Json,
}

// Default value functions
fn default_lines_per_page() -> u64 {
    106
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            lines_per_page: default_lines_per_page(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            FolioError::Config(format!(
                "Failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: explicit path > `FOLIO_CONFIG` >
    /// built-in defaults.
    ///
    /// A path that was named (either way) but cannot be read or
    /// parsed is a configuration error; only the absence of any path
    /// falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(path);
        }
        Ok(Self::default())
    }
}
