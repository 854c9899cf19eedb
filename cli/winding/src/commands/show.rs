//! `winding show`: one configuration row in detail.

use std::fmt;

use anyhow::{Context, Result};
use winding_core::{ConfigKey, WindingConfiguration};
use winding_data::ConfigurationDataset;

/// A row together with the supply frequency its speed is quoted at.
pub(crate) struct ConfigurationInfo<'a> {
    pub row: &'a WindingConfiguration,
    pub frequency_hz: f64,
}

impl fmt::Display for ConfigurationInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row;
        writeln!(f, "=== Configuration: {} ===", row.key)?;
        writeln!(f, "Layer:           {}", row.layer().label())?;
        writeln!(f, "Connection:      {}", row.connection().label())?;
        writeln!(f, "q:               {} ({})", row.q, row.q_type)?;
        writeln!(f, "Coils per group: {}", row.coils_per_group)?;
        writeln!(f, "Pitch span:      {}", row.pitch_span())?;
        writeln!(f, "Winding factor:  {}", row.winding_factor)?;
        writeln!(f, "Quality:         {}", row.quality)?;
        if let Some(groups) = row.connection().group_count(row.poles()) {
            writeln!(f, "Groups:          {groups} per phase")?;
        }
        writeln!(
            f,
            "Synchronous:     {} rpm at {} Hz",
            row.synchronous_rpm(self.frequency_hz),
            self.frequency_hz
        )?;
        if row.is_recommended() {
            writeln!(f, "Recommended pitch for this group.")?;
        }
        Ok(())
    }
}

pub fn run(dataset: &ConfigurationDataset, key: &ConfigKey, frequency_hz: f64) -> Result<()> {
    let row = dataset
        .exact_row(key)
        .with_context(|| format!("looking up {key}"))?;
    print!("{}", ConfigurationInfo { row, frequency_hz });
    Ok(())
}
