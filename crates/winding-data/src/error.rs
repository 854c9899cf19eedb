//! Error types for dataset loading and lookup.

use std::path::PathBuf;

use winding_core::ConfigKey;

/// Errors that can occur while loading or querying the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The full key does not exist in the dataset.
    #[error("configuration not found: {key}")]
    ConfigurationNotFound {
        /// The key that was looked up.
        key: ConfigKey,
    },

    /// Dataset file not found.
    #[error("dataset file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The file extension is neither `.toml` nor `.json`.
    #[error("unsupported dataset format: {} (expected .toml or .json)", path.display())]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON deserialization error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading the dataset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;
