//! Error types and error handling for folio.
//!
//! This module defines the error types used throughout the
//! application. Exit-code mapping is handled in the binary entry
//! point, not here.

use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Main error type for the indexing pipeline and its CLI adapter
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read line from input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write index output: {0}")]
    Write(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl FolioError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this failure happened before the pipeline ran
    /// (bad flags, unopenable files, malformed config)
    pub fn is_config(&self) -> bool {
        matches!(self, FolioError::Config(_) | FolioError::Toml(_))
    }
}
