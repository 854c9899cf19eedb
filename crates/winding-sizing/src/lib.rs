//! Winding sizing for three-phase induction motor stators.
//!
//! Given one configuration row and the motor ratings, the engine derives the
//! pole pitch, flux per pole and coil group count, then produces one
//! construction option per feasible parallel-circuit factor: turns per
//! phase, turns per coil and the smallest sufficient wire gauge.

pub mod circuits;
pub mod current;
pub mod engine;
pub mod error;
pub mod magnetic;
pub mod recipe;
pub mod turns;

pub use engine::{SizingEngine, SizingReport};
pub use error::{Result, SizingError};
pub use recipe::ConstructionOption;
