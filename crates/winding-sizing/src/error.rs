//! Error types for the sizing engine.

use winding_core::{ConfigKey, InputError};

/// Errors that abort a sizing request.
///
/// An undersized wire is not an error: the option is still returned and
/// flagged, see [`ConstructionOption::is_wire_insufficient`](crate::ConstructionOption::is_wire_insufficient).
#[derive(Debug, thiserror::Error)]
pub enum SizingError {
    #[error("configuration not found: {key}")]
    ConfigurationNotFound { key: ConfigKey },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invariant violated: {detail}")]
    Invariant { detail: String },
}

impl SizingError {
    pub(crate) fn invariant(detail: impl Into<String>) -> Self {
        SizingError::Invariant {
            detail: detail.into(),
        }
    }
}

/// Result type for sizing operations.
pub type Result<T> = std::result::Result<T, SizingError>;
