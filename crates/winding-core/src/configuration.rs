//! Precomputed winding configuration rows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::{ConfigKey, ConnectionType, Layer};

/// Pitch note value that marks the recommended pitch of a group.
pub const RECOMMENDED_NOTE: &str = "recommended";

/// Whether slots-per-pole-per-phase is a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QType {
    Integer,
    Fractional,
}

impl fmt::Display for QType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QType::Integer => write!(f, "integer"),
            QType::Fractional => write!(f, "fractional"),
        }
    }
}

/// Quality class assigned to a row from its winding factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityClass {
    Excellent,
    Good,
    Acceptable,
    Avoid,
}

impl QualityClass {
    /// All classes, best first.
    pub const ALL: [QualityClass; 4] = [
        QualityClass::Excellent,
        QualityClass::Good,
        QualityClass::Acceptable,
        QualityClass::Avoid,
    ];

    /// Excellent and good rows are offered as recommended configurations.
    pub fn is_recommendable(self) -> bool {
        matches!(self, QualityClass::Excellent | QualityClass::Good)
    }
}

impl fmt::Display for QualityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityClass::Excellent => write!(f, "excellent"),
            QualityClass::Good => write!(f, "good"),
            QualityClass::Acceptable => write!(f, "acceptable"),
            QualityClass::Avoid => write!(f, "avoid"),
        }
    }
}

/// One valid winding configuration with its precomputed metadata.
///
/// Rows are produced by the dataset loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WindingConfiguration {
    /// Composite key.
    pub key: ConfigKey,
    /// Slots per pole per phase.
    pub q: f64,
    /// Whether `q` is integral.
    pub q_type: QType,
    /// Coil distribution per group, as published (e.g. "2" or "1-2").
    pub coils_per_group: String,
    /// Winding factor ζ in (0, 1].
    pub winding_factor: f64,
    /// Quality class derived from ζ.
    pub quality: QualityClass,
    /// Free-text pitch note; may mark the recommended pitch.
    pub pitch_note: String,
}

impl WindingConfiguration {
    pub fn slots(&self) -> u32 {
        self.key.slots
    }

    pub fn poles(&self) -> u32 {
        self.key.poles
    }

    pub fn layer(&self) -> Layer {
        self.key.layer
    }

    pub fn connection(&self) -> ConnectionType {
        self.key.connection
    }

    pub fn pitch(&self) -> u32 {
        self.key.pitch
    }

    /// Whether the pitch note marks this row as the recommended pitch.
    pub fn is_recommended(&self) -> bool {
        self.pitch_note.trim().eq_ignore_ascii_case(RECOMMENDED_NOTE)
    }

    /// Whether the row is classed excellent.
    pub fn is_excellent(&self) -> bool {
        self.quality == QualityClass::Excellent
    }

    /// Synchronous speed in rpm at the given supply frequency, truncated.
    pub fn synchronous_rpm(&self, frequency_hz: f64) -> u32 {
        synchronous_rpm(self.key.poles, frequency_hz)
    }

    /// Pitch written as slot span on a winding diagram, e.g. `1:7` for y = 6.
    pub fn pitch_span(&self) -> String {
        format!("1:{}", self.key.pitch + 1)
    }
}

/// Synchronous speed `120 f / P`, truncated toward zero.
pub fn synchronous_rpm(poles: u32, frequency_hz: f64) -> u32 {
    if poles == 0 {
        return 0;
    }
    ((120.0 * frequency_hz) / f64::from(poles)) as u32
}
