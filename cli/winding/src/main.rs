//! Winding CLI: select a stator winding configuration and size its coils.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use winding_core::{ConfigKey, ConnectionType, Layer, SizingInput};
use winding_gauge::LookupMode;
use winding_select::SelectionState;

use manifest::WindingManifest;

#[derive(Parser)]
#[command(name = "winding", version, about = "Three-phase stator winding calculator")]
struct Cli {
    /// Dataset file (.toml or .json); overrides winding.toml
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    /// Log every calculation step
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a winding.toml template in the current directory
    Init {
        /// Overwrite an existing winding.toml
        #[arg(long)]
        force: bool,
    },
    /// List the legal choices of the next unset stage
    Options {
        #[arg(long)]
        slots: Option<u32>,
        #[arg(long)]
        poles: Option<u32>,
        /// single or double
        #[arg(long)]
        layer: Option<Layer>,
        /// end-to-end (g=P) or end-to-start (g=P/2)
        #[arg(long)]
        connection: Option<ConnectionType>,
        #[arg(long)]
        pitch: Option<u32>,
        /// Intended power rating in CV, used for recommendations
        #[arg(long)]
        power: Option<f64>,
    },
    /// Compute construction options for a configuration
    Calc {
        #[command(flatten)]
        key: KeyArgs,
        /// Phase voltage in V (default from winding.toml, else 380)
        #[arg(long)]
        voltage: Option<String>,
        /// Rated power in CV
        #[arg(long)]
        power: String,
        /// Core diameter in mm
        #[arg(long)]
        diameter: String,
        /// Core axial length in mm
        #[arg(long)]
        length: String,
        /// Supply frequency in Hz (default from winding.toml, else 60)
        #[arg(long)]
        frequency: Option<String>,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the details of one configuration
    Show {
        #[command(flatten)]
        key: KeyArgs,
        /// Supply frequency in Hz for the synchronous speed
        #[arg(long)]
        frequency: Option<f64>,
    },
    /// Inspect the configuration dataset
    Dataset {
        #[command(subcommand)]
        action: DatasetAction,
    },
    /// Look up a wire gauge for a cross-section
    Gauge {
        /// Cross-section in mm²
        area: Option<String>,
        /// Lookup mode (smallest, nearest)
        #[arg(long, default_value_t = LookupMode::SmallestSufficient)]
        mode: LookupMode,
        /// List the whole gauge table
        #[arg(long)]
        list: bool,
    },
    /// List the standard power ratings
    Ratings,
}

#[derive(Subcommand)]
enum DatasetAction {
    /// Show row counts and the source fingerprint
    Stats,
    /// Validate every record and report skipped or duplicate ones
    Check,
}

/// The five key dimensions, all required.
#[derive(Args)]
struct KeyArgs {
    #[arg(long)]
    slots: u32,
    #[arg(long)]
    poles: u32,
    /// single or double
    #[arg(long)]
    layer: Layer,
    /// end-to-end (g=P) or end-to-start (g=P/2)
    #[arg(long)]
    connection: ConnectionType,
    #[arg(long)]
    pitch: u32,
}

impl KeyArgs {
    fn key(&self) -> ConfigKey {
        ConfigKey::new(
            self.slots,
            self.poles,
            self.layer,
            self.connection,
            self.pitch,
        )
    }
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (manifest, root) = load_manifest_optional(&cwd)?;
    init_logging(cli.verbose, manifest.log_filter());

    let dataset_path = match &cli.dataset {
        Some(path) => cwd.join(path),
        None => manifest.dataset_path(root.as_deref().unwrap_or(&cwd)),
    };

    match cli.command {
        Commands::Init { force } => commands::init::run(&cwd, force),

        Commands::Options {
            slots,
            poles,
            layer,
            connection,
            pitch,
            power,
        } => {
            let dataset = commands::dataset::open(&dataset_path)?;
            let selection = SelectionState {
                slots,
                poles,
                layer,
                connection,
                pitch,
            };
            commands::options::run(
                &dataset,
                selection,
                power.unwrap_or(manifest.power_hint_cv()),
            )
        }

        Commands::Calc {
            key,
            voltage,
            power,
            diameter,
            length,
            frequency,
            format,
        } => {
            let format = commands::calc::OutputFormat::parse(&format)?;
            let voltage = voltage.unwrap_or_else(|| manifest.voltage().to_string());
            let frequency = frequency.unwrap_or_else(|| manifest.frequency_hz().to_string());
            let input = SizingInput::from_raw(&voltage, &power, &diameter, &length, Some(&frequency))
                .context("invalid sizing input")?;
            let dataset = commands::dataset::open(&dataset_path)?;
            commands::calc::run(&dataset, &key.key(), &input, format)
        }

        Commands::Show { key, frequency } => {
            let frequency = frequency.unwrap_or(manifest.frequency_hz());
            if !(frequency > 0.0 && frequency.is_finite()) {
                bail!("frequency must be greater than zero (got {frequency})");
            }
            let dataset = commands::dataset::open(&dataset_path)?;
            commands::show::run(&dataset, &key.key(), frequency)
        }

        Commands::Dataset { action } => match action {
            DatasetAction::Stats => commands::dataset::stats(&dataset_path),
            DatasetAction::Check => commands::dataset::check(&dataset_path),
        },

        Commands::Gauge { area, mode, list } => {
            if list {
                commands::gauge::list()
            } else if let Some(area) = area {
                commands::gauge::lookup(&area, mode)
            } else {
                bail!("give a cross-section in mm², or --list for the whole table")
            }
        }

        Commands::Ratings => commands::ratings::run(),
    }
}

/// Find `winding.toml`; without one the built-in defaults apply.
fn load_manifest_optional(cwd: &Path) -> anyhow::Result<(WindingManifest, Option<PathBuf>)> {
    match WindingManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((manifest, Some(dir))),
        None => Ok((WindingManifest::default(), None)),
    }
}

/// `RUST_LOG` wins, then `--verbose`, then the manifest filter, then `warn`.
fn init_logging(verbose: bool, manifest_filter: Option<&str>) {
    let fallback = if verbose {
        "debug"
    } else {
        manifest_filter.unwrap_or("warn")
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
