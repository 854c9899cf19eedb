//! `winding calc`: size a configuration and print its construction options.

use anyhow::{bail, Context, Result};
use winding_core::{ConfigKey, SizingInput};
use winding_data::ConfigurationDataset;
use winding_gauge::GaugeTable;
use winding_sizing::SizingEngine;

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown format '{other}' (expected 'text' or 'json')"),
        }
    }
}

pub fn run(
    dataset: &ConfigurationDataset,
    key: &ConfigKey,
    input: &SizingInput,
    format: OutputFormat,
) -> Result<()> {
    let table = GaugeTable::standard();
    let report = SizingEngine::new(&table)
        .compute_recipes(dataset, key, input)
        .with_context(|| format!("sizing {key}"))?;

    match format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{json}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use winding_core::{ConnectionType, Layer};
    use winding_sizing::SizingReport;

    fn shipped() -> ConfigurationDataset {
        let path =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/configurations.toml");
        crate::commands::dataset::open(&path).unwrap()
    }

    fn report(key: ConfigKey, input: SizingInput) -> SizingReport {
        let table = GaugeTable::standard();
        SizingEngine::new(&table)
            .compute_recipes(&shipped(), &key, &input)
            .unwrap()
    }

    #[test]
    fn text_report_lists_every_option() {
        let key = ConfigKey::new(24, 4, Layer::Single, ConnectionType::EndToEnd, 6);
        let input = SizingInput::new(380.0, 5.0, 110.0, 70.0).unwrap();
        let text = report(key, input).to_string();

        assert!(text.starts_with("=== Sizing: S=24, P=4, single, g=P, y=6 ==="));
        assert!(text.contains("Voltage:         380 V (380/660 V)"));
        assert!(text.contains("--- Option 1 (k1 = 1) ---"));
        assert!(text.contains("--- Option 3 (k1 = 4) ---"));
        assert!(text.contains("  Turns per coil:  61"));
        assert!(text.contains("19 AWG"));
        assert!(!text.contains("[WARNING]"));
    }

    #[test]
    fn undersized_wire_is_flagged() {
        let key = ConfigKey::new(48, 4, Layer::Double, ConnectionType::EndToEnd, 10);
        let input = SizingInput::new(220.0, 500.0, 400.0, 300.0).unwrap();
        let text = report(key, input).to_string();
        assert!(text.contains("[WARNING] largest gauge"));
    }

    #[test]
    fn unknown_key_has_context() {
        let key = ConfigKey::new(24, 4, Layer::Single, ConnectionType::EndToEnd, 2);
        let input = SizingInput::new(380.0, 5.0, 110.0, 70.0).unwrap();
        let err = run(&shipped(), &key, &input, OutputFormat::Text).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("sizing S=24"));
        assert!(message.contains("configuration not found"));
    }

    #[test]
    fn format_parsing() {
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("yaml").is_err());
    }
}
