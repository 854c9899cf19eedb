//! Error types for the cascading selector.

use winding_data::DataError;

use crate::stage::Stage;

/// Errors from setting or resolving a selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("{value} is not a legal {stage} for the current selection")]
    IllegalValue { stage: Stage, value: String },

    #[error("selection incomplete: {missing} is not set")]
    Incomplete { missing: Stage },

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, SelectError>;
