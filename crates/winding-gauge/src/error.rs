//! Error types for gauge table construction and lookup.

/// Errors from the wire gauge table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaugeError {
    /// Lookup area was zero, negative or NaN.
    #[error("no gauge for a cross-section of {area} mm²")]
    NotFound { area: f64 },

    /// A table was built with no entries.
    #[error("gauge table is empty")]
    Empty,

    /// Two entries share the same cross-section.
    #[error("duplicate gauge area {area} mm² ('{first}' and '{second}')")]
    DuplicateArea {
        area: f64,
        first: String,
        second: String,
    },

    /// An entry has a non-positive cross-section.
    #[error("gauge '{label}' has invalid area {area} mm²")]
    InvalidArea { label: String, area: f64 },
}

/// Result type for gauge operations.
pub type Result<T> = std::result::Result<T, GaugeError>;
