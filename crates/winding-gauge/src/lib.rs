//! Magnet wire gauge table.
//!
//! Maps a required copper cross-section to a standardized AWG size. The
//! table is sorted by ascending area once, at construction, and is
//! read-only afterwards.

mod awg;
pub mod error;
pub mod table;

pub use error::{GaugeError, Result};
pub use table::{GaugeMatch, GaugeTable, LookupMode, WireGaugeEntry};
