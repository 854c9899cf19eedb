//! Core types for the stator winding calculator.
//!
//! A three-phase stator winding is identified by five dimensions: slot
//! count, pole count, layer, connection type and coil pitch. This crate
//! defines those dimensions ([`ConfigKey`]), the precomputed row attached
//! to each valid key ([`WindingConfiguration`]), and the validated
//! voltage/power/geometry input ([`SizingInput`]) consumed by the sizing
//! pipeline.

pub mod configuration;
pub mod error;
pub mod input;
pub mod key;
pub mod ratings;

pub use configuration::{synchronous_rpm, QType, QualityClass, WindingConfiguration};
pub use error::InputError;
pub use input::{parse_number, PhaseVoltage, SizingInput, DEFAULT_FREQUENCY_HZ};
pub use key::{ConfigKey, ConnectionType, Layer};
pub use ratings::{standard_ratings, PowerRating};
