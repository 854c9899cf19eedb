//! The five key dimensions of a winding configuration.
//!
//! A configuration is identified by (slots, poles, layer, connection, pitch).
//! Key ordering is lexicographic in that order, which is also the order in
//! which a selection is narrowed down.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Coil layers per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    /// One coil side per slot.
    Single,
    /// Two coil sides per slot.
    Double,
}

impl Layer {
    /// Both variants, in key order.
    pub const ALL: [Layer; 2] = [Layer::Single, Layer::Double];

    /// Layer coefficient `k` used in the turns-per-phase equation.
    pub fn coefficient(self) -> u32 {
        match self {
            Layer::Single => 1,
            Layer::Double => 2,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Layer::Single => "Single layer",
            Layer::Double => "Double layer",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Single => write!(f, "single"),
            Layer::Double => write!(f, "double"),
        }
    }
}

impl FromStr for Layer {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Layer::Single),
            "double" => Ok(Layer::Double),
            _ => Err(InputError::UnknownVariant {
                kind: "layer",
                raw: s.to_string(),
                expected: "single, double",
            }),
        }
    }
}

/// Group-to-group wiring topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionType {
    /// One group per pole (g = P).
    #[serde(alias = "g=P")]
    EndToEnd,
    /// One group per pole pair, consequent poles (g = P/2).
    #[serde(alias = "g=P/2")]
    EndToStart,
}

impl ConnectionType {
    /// Both variants, in key order.
    pub const ALL: [ConnectionType; 2] = [ConnectionType::EndToEnd, ConnectionType::EndToStart];

    /// Compact notation used on winding diagrams.
    pub fn notation(self) -> &'static str {
        match self {
            ConnectionType::EndToEnd => "g=P",
            ConnectionType::EndToStart => "g=P/2",
        }
    }

    /// How consecutive groups are joined.
    pub fn description(self) -> &'static str {
        match self {
            ConnectionType::EndToEnd => "end-to-end",
            ConnectionType::EndToStart => "end-to-start",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> String {
        format!("{} ({})", self.notation(), self.description())
    }

    /// Number of coil groups per phase for a machine with `poles` poles.
    ///
    /// Returns `None` when the topology cannot be built: end-to-start
    /// needs an even pole count, and zero poles is never valid.
    pub fn group_count(self, poles: u32) -> Option<u32> {
        if poles == 0 {
            return None;
        }
        match self {
            ConnectionType::EndToEnd => Some(poles),
            ConnectionType::EndToStart if poles % 2 == 0 => Some(poles / 2),
            ConnectionType::EndToStart => None,
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for ConnectionType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "end-to-end" | "g=p" => Ok(ConnectionType::EndToEnd),
            "end-to-start" | "g=p/2" => Ok(ConnectionType::EndToStart),
            _ => Err(InputError::UnknownVariant {
                kind: "connection type",
                raw: s.to_string(),
                expected: "end-to-end, end-to-start, g=P, g=P/2",
            }),
        }
    }
}

/// Composite key of a winding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigKey {
    /// Stator slot count (S).
    pub slots: u32,
    /// Pole count (P).
    pub poles: u32,
    /// Coil layers per slot.
    pub layer: Layer,
    /// Group connection topology.
    pub connection: ConnectionType,
    /// Coil pitch in slots (y).
    pub pitch: u32,
}

impl ConfigKey {
    pub fn new(
        slots: u32,
        poles: u32,
        layer: Layer,
        connection: ConnectionType,
        pitch: u32,
    ) -> Self {
        Self {
            slots,
            poles,
            layer,
            connection,
            pitch,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S={}, P={}, {}, {}, y={}",
            self.slots,
            self.poles,
            self.layer,
            self.connection.notation(),
            self.pitch
        )
    }
}
