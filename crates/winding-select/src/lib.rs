//! Cascading selection of a stator winding configuration.
//!
//! A selection narrows the dataset one key dimension at a time. Each stage
//! offers only the values the dataset holds for the upstream choices, marks
//! a recommendation, and resets everything downstream when it changes.

pub mod choice;
pub mod error;
pub mod selector;
pub mod stage;
pub mod state;

pub use choice::{Choice, Listing, Offered, PitchChoice, StageOptions};
pub use error::{Result, SelectError};
pub use selector::{CascadingSelector, Transition, DEFAULT_POWER_HINT_CV};
pub use stage::Stage;
pub use state::SelectionState;
