//! `winding.toml` manifest parsing and defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use winding_core::DEFAULT_FREQUENCY_HZ;
use winding_select::DEFAULT_POWER_HINT_CV;

/// Manifest file name, searched for upward from the working directory.
pub const MANIFEST_FILE: &str = "winding.toml";

/// Dataset location used when neither the manifest nor `--dataset` gives one.
pub const DEFAULT_DATASET_PATH: &str = "data/configurations.toml";

/// Phase voltage used when the manifest gives none.
pub const DEFAULT_VOLTAGE: f64 = 380.0;

/// The top-level manifest structure. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct WindingManifest {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DatasetConfig {
    /// Dataset file, relative to the manifest directory.
    #[serde(default)]
    pub path: Option<String>,
}

/// Default sizing inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub frequency_hz: Option<f64>,
    #[serde(default)]
    pub voltage: Option<f64>,
    /// Power rating that drives layer and connection recommendations.
    #[serde(default)]
    pub power_hint_cv: Option<f64>,
}

/// Logging section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `winding_sizing=debug`.
    #[serde(default)]
    pub filter: Option<String>,
}

impl WindingManifest {
    /// Search upward from `start_dir` for a `winding.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: WindingManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing winding.toml")
    }

    /// Dataset file resolved against the manifest directory.
    pub fn dataset_path(&self, root: &Path) -> PathBuf {
        root.join(self.dataset.path.as_deref().unwrap_or(DEFAULT_DATASET_PATH))
    }

    pub fn frequency_hz(&self) -> f64 {
        self.defaults.frequency_hz.unwrap_or(DEFAULT_FREQUENCY_HZ)
    }

    pub fn voltage(&self) -> f64 {
        self.defaults.voltage.unwrap_or(DEFAULT_VOLTAGE)
    }

    pub fn power_hint_cv(&self) -> f64 {
        self.defaults.power_hint_cv.unwrap_or(DEFAULT_POWER_HINT_CV)
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.logging.filter.as_deref()
    }

    /// Generate the default template for `winding init`.
    pub fn template() -> String {
        format!(
            r#"[dataset]
path = "{DEFAULT_DATASET_PATH}"

[defaults]
frequency-hz = {DEFAULT_FREQUENCY_HZ:.1}
voltage = {DEFAULT_VOLTAGE:.1}
power-hint-cv = {DEFAULT_POWER_HINT_CV:.1}

[logging]
filter = "warn"
"#
        )
    }
}
