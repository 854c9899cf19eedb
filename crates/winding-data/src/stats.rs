//! Summary statistics of a loaded dataset.

use std::collections::BTreeMap;
use std::fmt;

use winding_core::{Layer, QualityClass};

use crate::dataset::ConfigurationDataset;

/// Row counts by category.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub total: usize,
    pub slots: Vec<u32>,
    pub by_quality: BTreeMap<QualityClass, usize>,
    pub by_layer: BTreeMap<Layer, usize>,
    /// Rows whose pitch note marks them recommended.
    pub recommended: usize,
    /// Source fingerprint, when the dataset came from a file.
    pub fingerprint: Option<String>,
}

impl DatasetStats {
    pub fn collect(dataset: &ConfigurationDataset) -> Self {
        // Every class and layer appears, even with a zero count.
        let mut by_quality: BTreeMap<QualityClass, usize> =
            QualityClass::ALL.iter().map(|&q| (q, 0)).collect();
        let mut by_layer: BTreeMap<Layer, usize> = Layer::ALL.iter().map(|&l| (l, 0)).collect();
        let mut recommended = 0;

        for row in dataset.rows() {
            *by_quality.entry(row.quality).or_default() += 1;
            *by_layer.entry(row.key.layer).or_default() += 1;
            if row.is_recommended() {
                recommended += 1;
            }
        }

        Self {
            total: dataset.len(),
            slots: dataset.distinct_slots(),
            by_quality,
            by_layer,
            recommended,
            fingerprint: dataset.fingerprint().map(|f| f.to_string()),
        }
    }
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows:        {}", self.total)?;
        writeln!(f, "Recommended: {}", self.recommended)?;
        if let Some(fp) = &self.fingerprint {
            writeln!(f, "Fingerprint: {fp}")?;
        }
        let slots: Vec<String> = self.slots.iter().map(u32::to_string).collect();
        writeln!(f, "Slots:       {}", slots.join(", "))?;
        writeln!(f)?;

        writeln!(f, "--- Quality ---")?;
        for (quality, count) in &self.by_quality {
            writeln!(f, "  {:<12} {count}", quality.to_string())?;
        }
        writeln!(f)?;

        writeln!(f, "--- Layer ---")?;
        for (layer, count) in &self.by_layer {
            writeln!(f, "  {:<12} {count}", layer.to_string())?;
        }
        Ok(())
    }
}
