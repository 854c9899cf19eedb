//! Validated sizing inputs.
//!
//! Inputs are built through [`SizingInput::new`] (or [`SizingInput::from_raw`]
//! for text fields) and re-checked with [`SizingInput::validate`] before any
//! numeric stage runs, so those stages can assume strictly positive, finite
//! quantities.

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Default supply frequency in Hz.
pub const DEFAULT_FREQUENCY_HZ: f64 = 60.0;

/// Phase voltage in volts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseVoltage(f64);

impl PhaseVoltage {
    /// Standard phase voltages and the supply networks they belong to.
    pub const STANDARD: [(u32, &'static str); 3] = [
        (220, "220/380 V"),
        (380, "380/660 V"),
        (440, "440/760 V"),
    ];

    pub fn new(volts: f64) -> Result<Self> {
        Ok(Self(positive("voltage", volts)?))
    }

    pub fn volts(self) -> f64 {
        self.0
    }

    /// Supply network label for the standard voltages; `None` for free values.
    pub fn network_label(self) -> Option<&'static str> {
        Self::STANDARD
            .iter()
            .find(|(v, _)| f64::from(*v) == self.0)
            .map(|(_, label)| *label)
    }
}

/// Voltage, power and core geometry for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SizingInput {
    voltage: PhaseVoltage,
    power_cv: f64,
    diameter_mm: f64,
    length_mm: f64,
    frequency_hz: f64,
}

impl SizingInput {
    /// Validate and build an input at the default 60 Hz.
    pub fn new(voltage: f64, power_cv: f64, diameter_mm: f64, length_mm: f64) -> Result<Self> {
        Ok(Self {
            voltage: PhaseVoltage::new(voltage)?,
            power_cv: positive("power", power_cv)?,
            diameter_mm: positive("diameter", diameter_mm)?,
            length_mm: positive("length", length_mm)?,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
        })
    }

    /// Replace the supply frequency.
    pub fn with_frequency(mut self, frequency_hz: f64) -> Result<Self> {
        self.frequency_hz = positive("frequency", frequency_hz)?;
        Ok(self)
    }

    /// Parse and validate from text fields; a missing frequency means 60 Hz.
    pub fn from_raw(
        voltage: &str,
        power_cv: &str,
        diameter_mm: &str,
        length_mm: &str,
        frequency_hz: Option<&str>,
    ) -> Result<Self> {
        let input = Self::new(
            parse_number("voltage", voltage)?,
            parse_number("power", power_cv)?,
            parse_number("diameter", diameter_mm)?,
            parse_number("length", length_mm)?,
        )?;
        match frequency_hz {
            Some(raw) => input.with_frequency(parse_number("frequency", raw)?),
            None => Ok(input),
        }
    }

    /// Re-check every field. Inputs built through serde skip the
    /// constructor, so consumers validate again at their boundary.
    pub fn validate(&self) -> Result<()> {
        positive("voltage", self.voltage.volts())?;
        positive("power", self.power_cv)?;
        positive("diameter", self.diameter_mm)?;
        positive("length", self.length_mm)?;
        positive("frequency", self.frequency_hz)?;
        Ok(())
    }

    pub fn voltage(&self) -> PhaseVoltage {
        self.voltage
    }

    /// Rated power in CV.
    pub fn power_cv(&self) -> f64 {
        self.power_cv
    }

    pub fn diameter_mm(&self) -> f64 {
        self.diameter_mm
    }

    pub fn length_mm(&self) -> f64 {
        self.length_mm
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }
}

/// Parse a decimal number, accepting a comma as decimal separator.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::Unparseable {
            field,
            raw: raw.to_string(),
        })
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonPositive { field, value })
    }
}
