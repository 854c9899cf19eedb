//! CLI command implementations.

pub mod calc;
pub mod dataset;
pub mod gauge;
pub mod init;
pub mod options;
pub mod ratings;
pub mod show;
