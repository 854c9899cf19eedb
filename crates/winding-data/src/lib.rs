//! Dataset of valid three-phase stator winding configurations.
//!
//! The dataset is external data: one record per valid (slots, poles,
//! layer, connection, pitch) combination with its precomputed winding
//! factor and quality metadata. This crate loads it from TOML or JSON and
//! exposes the read-only queries the selection and sizing stages need:
//! distinct-value projections, per-group rows ordered by winding factor,
//! exact lookup and the recommended pitch.

pub mod dataset;
pub mod error;
pub mod fingerprint;
pub mod load;
pub mod stats;

pub use dataset::{ConfigurationDataset, KeyFilter};
pub use error::{DataError, Result};
pub use fingerprint::Fingerprint;
pub use load::{load_dataset, parse_dataset_json, parse_dataset_toml, LoadIssue, LoadReport};
pub use stats::DatasetStats;
