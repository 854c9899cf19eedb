//! Sorted gauge table and area lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::awg::STANDARD_AWG;
use crate::error::{GaugeError, Result};

/// One standardized wire size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WireGaugeEntry {
    /// Copper cross-section in mm².
    pub area_mm2: f64,
    /// Gauge number; negative for the 0-series (-1 = 1/0, -4 = 4/0).
    pub gauge: i32,
    /// Display label, e.g. "19 AWG".
    pub label: String,
}

impl WireGaugeEntry {
    pub fn new(area_mm2: f64, gauge: i32, label: impl Into<String>) -> Self {
        Self {
            area_mm2,
            gauge,
            label: label.into(),
        }
    }
}

/// How an area is matched to a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupMode {
    /// Closest area in either direction.
    NearestMatch,
    /// Smallest area that is at least the requested one.
    #[default]
    SmallestSufficient,
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMode::NearestMatch => write!(f, "nearest"),
            LookupMode::SmallestSufficient => write!(f, "smallest"),
        }
    }
}

impl FromStr for LookupMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(LookupMode::NearestMatch),
            "smallest" | "smallest-sufficient" => Ok(LookupMode::SmallestSufficient),
            other => Err(format!(
                "unknown lookup mode '{other}' (expected 'nearest' or 'smallest')"
            )),
        }
    }
}

/// Result of a gauge lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GaugeMatch {
    /// The selected gauge.
    pub entry: WireGaugeEntry,
    /// The area that was asked for, in mm².
    pub requested_area_mm2: f64,
    /// `entry.area_mm2 - requested_area_mm2`; negative when the wire is too thin.
    pub margin_mm2: f64,
}

impl GaugeMatch {
    /// Whether the selected wire carries at least the requested cross-section.
    pub fn is_sufficient(&self) -> bool {
        self.entry.area_mm2 >= self.requested_area_mm2
    }

    /// Absolute area difference.
    pub fn difference_mm2(&self) -> f64 {
        self.margin_mm2.abs()
    }
}

/// Immutable gauge table, sorted by ascending area.
///
/// Built once and shared by reference; lookups never depend on the order
/// in which entries were declared.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeTable {
    entries: Vec<WireGaugeEntry>,
}

impl GaugeTable {
    /// Build a table from entries in any order.
    pub fn new(mut entries: Vec<WireGaugeEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GaugeError::Empty);
        }
        if let Some(bad) = entries
            .iter()
            .find(|e| !(e.area_mm2 > 0.0 && e.area_mm2.is_finite()))
        {
            return Err(GaugeError::InvalidArea {
                label: bad.label.clone(),
                area: bad.area_mm2,
            });
        }
        entries.sort_by(|a, b| a.area_mm2.total_cmp(&b.area_mm2));
        if let Some(pair) = entries.windows(2).find(|w| w[0].area_mm2 == w[1].area_mm2) {
            return Err(GaugeError::DuplicateArea {
                area: pair[0].area_mm2,
                first: pair[0].label.clone(),
                second: pair[1].label.clone(),
            });
        }
        Ok(Self { entries })
    }

    /// The standard AWG magnet wire table (40 AWG to 4/0 AWG).
    pub fn standard() -> Self {
        let mut entries: Vec<WireGaugeEntry> = STANDARD_AWG
            .iter()
            .map(|&(area, gauge, label)| WireGaugeEntry::new(area, gauge, label))
            .collect();
        entries.sort_by(|a, b| a.area_mm2.total_cmp(&b.area_mm2));
        Self { entries }
    }

    /// Entries in ascending area order.
    pub fn entries(&self) -> &[WireGaugeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The thickest wire in the table.
    pub fn largest(&self) -> &WireGaugeEntry {
        // Construction guarantees at least one entry.
        &self.entries[self.entries.len() - 1]
    }

    /// Match `area_mm2` to a gauge.
    ///
    /// Fails only for non-positive (or NaN) areas. In smallest-sufficient
    /// mode an area beyond the table yields the largest entry with a
    /// negative margin; callers check [`GaugeMatch::is_sufficient`].
    pub fn lookup(&self, area_mm2: f64, mode: LookupMode) -> Result<GaugeMatch> {
        if area_mm2.is_nan() || area_mm2 <= 0.0 {
            return Err(GaugeError::NotFound { area: area_mm2 });
        }
        let entry = match mode {
            LookupMode::NearestMatch => self.nearest(area_mm2),
            LookupMode::SmallestSufficient => self.smallest_sufficient(area_mm2),
        };
        Ok(GaugeMatch {
            entry: entry.clone(),
            requested_area_mm2: area_mm2,
            margin_mm2: entry.area_mm2 - area_mm2,
        })
    }

    fn nearest(&self, area_mm2: f64) -> &WireGaugeEntry {
        // Strict comparison keeps the smaller area on an exact tie.
        let mut best = &self.entries[0];
        let mut best_distance = (best.area_mm2 - area_mm2).abs();
        for entry in &self.entries[1..] {
            let distance = (entry.area_mm2 - area_mm2).abs();
            if distance < best_distance {
                best = entry;
                best_distance = distance;
            }
        }
        best
    }

    fn smallest_sufficient(&self, area_mm2: f64) -> &WireGaugeEntry {
        let idx = self.entries.partition_point(|e| e.area_mm2 < area_mm2);
        self.entries.get(idx).unwrap_or_else(|| self.largest())
    }
}

impl Default for GaugeTable {
    fn default() -> Self {
        Self::standard()
    }
}
