//! Construction options: one winding recipe per parallel-circuit factor.

use std::fmt;

use serde::Serialize;
use winding_core::{ConnectionType, Layer};
use winding_gauge::GaugeMatch;

/// One way to build the winding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConstructionOption {
    /// Position in the report, from 1.
    pub number: usize,
    /// Parallel-circuit factor.
    pub k1: u32,
    pub total_groups: u32,
    pub groups_in_series: u32,
    pub groups_in_parallel: u32,
    pub coils_per_group: String,
    pub pitch: u32,
    pub turns_per_coil: u32,
    pub turns_per_phase: f64,
    /// Required conductor cross-section per parallel path, mm².
    pub wire_area_mm2: f64,
    /// Gauge chosen for `wire_area_mm2`.
    pub wire: GaugeMatch,
    pub wire_gauge_label: String,
    pub connection: ConnectionType,
    pub layer: Layer,
    pub description: String,
}

impl ConstructionOption {
    /// Whether even the largest gauge is thinner than required.
    pub fn is_wire_insufficient(&self) -> bool {
        !self.wire.is_sufficient()
    }

    /// Winding instructions built from the option's fields.
    pub fn instructions(&self) -> String {
        let wiring = if self.k1 == 1 {
            "All groups connected in series. ".to_string()
        } else {
            format!(
                "For each phase, connect {} groups in series and join the sets \
                 in parallel ({} parallel circuits). ",
                self.groups_in_series, self.k1
            )
        };
        format!(
            "{wiring}Wind {} groups, each with {} coils, at pitch 1:{}. \
             Wind each coil with {} turns of {} wire. \
             Use an {} connection.",
            self.total_groups,
            self.coils_per_group,
            self.pitch + 1,
            self.turns_per_coil,
            self.wire_gauge_label,
            self.connection.description()
        )
    }
}

impl fmt::Display for ConstructionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Option {} (k1 = {}) ---", self.number, self.k1)?;
        writeln!(
            f,
            "  Groups:          {} in series x {} in parallel",
            self.groups_in_series, self.groups_in_parallel
        )?;
        writeln!(f, "  Turns per phase: {:.2}", self.turns_per_phase)?;
        writeln!(f, "  Turns per coil:  {}", self.turns_per_coil)?;
        writeln!(
            f,
            "  Wire:            {} ({:.3} mm², required {:.3} mm²)",
            self.wire_gauge_label, self.wire.entry.area_mm2, self.wire_area_mm2
        )?;
        if self.is_wire_insufficient() {
            writeln!(
                f,
                "  [WARNING] largest gauge is {:.3} mm² short; use parallel conductors",
                self.wire.difference_mm2()
            )?;
        }
        writeln!(f, "  {}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winding_gauge::{GaugeTable, LookupMode};

    fn option(k1: u32, connection: ConnectionType) -> ConstructionOption {
        let wire = GaugeTable::standard()
            .lookup(0.5, LookupMode::SmallestSufficient)
            .unwrap();
        ConstructionOption {
            number: 1,
            k1,
            total_groups: 4,
            groups_in_series: 4 / k1,
            groups_in_parallel: k1,
            coils_per_group: "1".into(),
            pitch: 6,
            turns_per_coil: 61,
            turns_per_phase: 491.64,
            wire_area_mm2: 0.5,
            wire_gauge_label: wire.entry.label.clone(),
            wire,
            connection,
            layer: Layer::Single,
            description: String::new(),
        }
    }

    #[test]
    fn series_instructions() {
        assert_eq!(
            option(1, ConnectionType::EndToEnd).instructions(),
            "All groups connected in series. Wind 4 groups, each with 1 coils, at pitch 1:7. \
             Wind each coil with 61 turns of 20 AWG wire. Use an end-to-end connection."
        );
    }

    #[test]
    fn parallel_instructions() {
        let text = option(2, ConnectionType::EndToStart).instructions();
        assert!(text.starts_with(
            "For each phase, connect 2 groups in series and join the sets in parallel \
             (2 parallel circuits). "
        ));
        assert!(text.ends_with("Use an end-to-start connection."));
    }

    #[test]
    fn display_block() {
        let mut opt = option(2, ConnectionType::EndToEnd);
        opt.description = opt.instructions();
        let text = opt.to_string();
        assert!(text.starts_with("--- Option 1 (k1 = 2) ---\n"));
        assert!(text.contains("  Groups:          2 in series x 2 in parallel\n"));
        assert!(text.contains("  Wire:            20 AWG"));
        assert!(!text.contains("[WARNING]"));
        assert!(text.ends_with("Use an end-to-end connection.\n"));
    }

    #[test]
    fn sufficiency_flag() {
        assert!(!option(1, ConnectionType::EndToEnd).is_wire_insufficient());
    }
}
