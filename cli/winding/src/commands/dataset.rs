//! `winding dataset`: dataset loading, statistics and validation.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;
use winding_data::{load_dataset, ConfigurationDataset, DatasetStats};

/// Load the dataset, logging skipped or duplicate records.
pub fn open(path: &Path) -> Result<ConfigurationDataset> {
    let (dataset, report) =
        load_dataset(path).with_context(|| format!("loading dataset {}", path.display()))?;
    if !report.is_clean() {
        warn!(
            skipped = report.issues.len(),
            duplicates = report.duplicates.len(),
            "dataset {} has records that were not loaded; run 'winding dataset check'",
            path.display()
        );
    }
    Ok(dataset)
}

pub fn stats(path: &Path) -> Result<()> {
    let dataset = open(path)?;
    println!("=== Dataset: {} ===", path.display());
    print!("{}", DatasetStats::collect(&dataset));
    Ok(())
}

pub fn check(path: &Path) -> Result<()> {
    let (_, report) =
        load_dataset(path).with_context(|| format!("loading dataset {}", path.display()))?;
    print!("{report}");
    if !report.is_clean() {
        bail!(
            "{} record(s) skipped, {} duplicate key(s)",
            report.issues.len(),
            report.duplicates.len()
        );
    }
    Ok(())
}
