//! Error types for input validation.

/// Input rejected at the boundary, before any numeric stage runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// A quantity that must be strictly positive was zero, negative or NaN.
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A numeric field could not be parsed.
    #[error("{field}: '{raw}' is not a number")]
    Unparseable {
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        raw: String,
    },

    /// An enumerated field had an unknown spelling.
    #[error("unknown {kind} '{raw}' (expected one of: {expected})")]
    UnknownVariant {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The raw text.
        raw: String,
        /// Accepted spellings, comma separated.
        expected: &'static str,
    },

    /// An integer dimension was below its minimum.
    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        /// Name of the offending field.
        field: &'static str,
        /// Minimum accepted value.
        min: u32,
        /// The rejected value.
        value: u32,
    },
}

/// Result type for input validation.
pub type Result<T> = std::result::Result<T, InputError>;
