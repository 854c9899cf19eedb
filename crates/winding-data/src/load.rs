//! Dataset loading from TOML or JSON.
//!
//! A dataset file holds a `configuration` array of records. Each record is
//! decoded and validated on its own: a malformed record is skipped and
//! reported, and a repeated key is ignored, so one bad line never fails the
//! whole load and reloading the same file is idempotent.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};
use winding_core::{
    ConfigKey, ConnectionType, Layer, QType, QualityClass, WindingConfiguration,
};

use crate::dataset::ConfigurationDataset;
use crate::error::{DataError, Result};
use crate::fingerprint::Fingerprint;

/// Top-level layout of a dataset file.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    configuration: Vec<serde_json::Value>,
}

/// One persisted configuration record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigurationRecord {
    slots: u32,
    poles: u32,
    layer: Layer,
    connection: ConnectionType,
    q: f64,
    q_type: QType,
    coils_per_group: String,
    pitch: u32,
    winding_factor: f64,
    quality: QualityClass,
    #[serde(default)]
    pitch_note: String,
}

impl ConfigurationRecord {
    fn validate(self) -> std::result::Result<WindingConfiguration, String> {
        if self.slots < 1 {
            return Err("slots must be at least 1".into());
        }
        if self.poles < 2 {
            return Err(format!("poles must be at least 2 (got {})", self.poles));
        }
        if self.pitch < 1 {
            return Err("pitch must be at least 1".into());
        }
        if !(self.winding_factor > 0.0 && self.winding_factor <= 1.0) {
            return Err(format!(
                "winding factor must be in (0, 1] (got {})",
                self.winding_factor
            ));
        }
        if !(self.q >= 0.0 && self.q.is_finite()) {
            return Err(format!("q must be non-negative (got {})", self.q));
        }
        if self.connection.group_count(self.poles).is_none() {
            return Err(format!(
                "{} connection needs an even pole count (got {})",
                self.connection, self.poles
            ));
        }
        Ok(WindingConfiguration {
            key: ConfigKey::new(
                self.slots,
                self.poles,
                self.layer,
                self.connection,
                self.pitch,
            ),
            q: self.q,
            q_type: self.q_type,
            coils_per_group: self.coils_per_group,
            winding_factor: self.winding_factor,
            quality: self.quality,
            pitch_note: self.pitch_note,
        })
    }
}

/// A record that was skipped during loading.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadIssue {
    /// Zero-based position of the record in the file.
    pub index: usize,
    /// Why it was skipped.
    pub message: String,
}

/// Outcome of a load: counts, ignored duplicates and skipped records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Records present in the source.
    pub records: usize,
    /// Rows that made it into the dataset.
    pub loaded: usize,
    /// Keys ignored because an earlier record already had them.
    pub duplicates: Vec<ConfigKey>,
    /// Records rejected by decoding or validation.
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    /// Whether every record was loaded.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.issues.is_empty()
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records: {}", self.records)?;
        writeln!(f, "Loaded:  {}", self.loaded)?;
        for issue in &self.issues {
            writeln!(f, "  [SKIPPED] record {}: {}", issue.index, issue.message)?;
        }
        for key in &self.duplicates {
            writeln!(f, "  [DUPLICATE] {key}")?;
        }
        if self.is_clean() {
            writeln!(f, "All records valid.")?;
        }
        Ok(())
    }
}

/// Load a dataset file, choosing the decoder by extension.
pub fn load_dataset(path: &Path) -> Result<(ConfigurationDataset, LoadReport)> {
    if !path.exists() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let content = std::fs::read_to_string(path)?;
    let (dataset, report) = match extension.as_deref() {
        Some("toml") => parse_dataset_toml(&content)?,
        Some("json") => parse_dataset_json(&content)?,
        _ => {
            return Err(DataError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };
    info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.issues.len(),
        duplicates = report.duplicates.len(),
        "dataset loaded"
    );
    Ok((dataset, report))
}

/// Parse a dataset from a TOML string.
pub fn parse_dataset_toml(content: &str) -> Result<(ConfigurationDataset, LoadReport)> {
    let file: DatasetFile = toml::from_str(content)?;
    Ok(build(file, content.as_bytes()))
}

/// Parse a dataset from a JSON string.
pub fn parse_dataset_json(content: &str) -> Result<(ConfigurationDataset, LoadReport)> {
    let file: DatasetFile = serde_json::from_str(content)?;
    Ok(build(file, content.as_bytes()))
}

fn build(file: DatasetFile, source: &[u8]) -> (ConfigurationDataset, LoadReport) {
    let mut report = LoadReport {
        records: file.configuration.len(),
        ..LoadReport::default()
    };

    let mut rows = Vec::with_capacity(file.configuration.len());
    for (index, value) in file.configuration.into_iter().enumerate() {
        let decoded = serde_json::from_value::<ConfigurationRecord>(value)
            .map_err(|e| e.to_string())
            .and_then(ConfigurationRecord::validate);
        match decoded {
            Ok(row) => rows.push(row),
            Err(message) => {
                warn!(index, %message, "skipping dataset record");
                report.issues.push(LoadIssue { index, message });
            }
        }
    }

    let (dataset, duplicates) = ConfigurationDataset::from_rows(rows);
    for key in &duplicates {
        warn!(%key, "ignoring duplicate configuration");
    }
    report.loaded = dataset.len();
    report.duplicates = duplicates;
    (dataset.with_fingerprint(Fingerprint::compute(source)), report)
}
