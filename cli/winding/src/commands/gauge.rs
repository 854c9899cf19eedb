//! `winding gauge`: wire gauge table and lookups.

use std::fmt;

use anyhow::{Context, Result};
use winding_core::parse_number;
use winding_gauge::{GaugeMatch, GaugeTable, LookupMode};

/// One lookup result and the mode that produced it.
pub(crate) struct GaugeLookup {
    pub found: GaugeMatch,
    pub mode: LookupMode,
}

impl fmt::Display for GaugeLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = &self.found;
        writeln!(
            f,
            "{} ({:.4} mm²) for {:.4} mm² [{}]",
            found.entry.label, found.entry.area_mm2, found.requested_area_mm2, self.mode
        )?;
        if found.is_sufficient() {
            return writeln!(f, "  margin:     +{:.4} mm²", found.margin_mm2);
        }
        writeln!(f, "  difference: -{:.4} mm²", found.difference_mm2())?;
        // Smallest-sufficient only falls short past the end of the table.
        if self.mode == LookupMode::SmallestSufficient {
            writeln!(
                f,
                "  [WARNING] exceeds the largest gauge; use parallel conductors"
            )?;
        }
        Ok(())
    }
}

/// Print the whole table, thinnest first.
pub fn list() -> Result<()> {
    let table = GaugeTable::standard();
    println!("Gauge table ({} entries):", table.len());
    println!();
    for entry in table.entries() {
        println!("  {:<10} {:>10.4} mm²", entry.label, entry.area_mm2);
    }
    Ok(())
}

pub fn lookup(raw_area: &str, mode: LookupMode) -> Result<()> {
    print!("{}", find(raw_area, mode)?);
    Ok(())
}

pub(crate) fn find(raw_area: &str, mode: LookupMode) -> Result<GaugeLookup> {
    let area = parse_number("area", raw_area).context("invalid cross-section")?;
    let found = GaugeTable::standard().lookup(area, mode)?;
    Ok(GaugeLookup { found, mode })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_sufficient_shows_margin() {
        let text = find("0.5", LookupMode::SmallestSufficient)
            .unwrap()
            .to_string();
        assert!(text.starts_with("20 AWG"));
        assert!(text.contains("[smallest]"));
        assert!(text.contains("margin:"));
    }

    #[test]
    fn nearest_below_shows_difference_without_warning() {
        // 0.057 mm² sits 0.0061 above 30 AWG and 0.0073 below 29 AWG.
        let text = find("0.057", LookupMode::NearestMatch).unwrap().to_string();
        assert!(text.contains("difference: -0.0061 mm²"));
        assert!(!text.contains("[WARNING]"));
    }

    #[test]
    fn oversize_area_warns() {
        let text = find("500", LookupMode::SmallestSufficient)
            .unwrap()
            .to_string();
        assert!(text.contains("difference: -"));
        assert!(text.contains("[WARNING]"));
    }

    #[test]
    fn rejects_bad_area() {
        assert!(find("abc", LookupMode::NearestMatch).is_err());
        assert!(find("0", LookupMode::NearestMatch).is_err());
        assert!(find("0,5", LookupMode::NearestMatch).is_ok());
    }
}
