//! Coil groups and parallel-circuit factors.

use winding_core::ConnectionType;

use crate::error::{Result, SizingError};

/// Parallel-circuit factors considered for every winding.
pub const PARALLEL_FACTORS: [u32; 4] = [1, 2, 3, 4];

/// Coil groups per phase for a connection type and pole count.
pub fn group_count(connection: ConnectionType, poles: u32) -> Result<u32> {
    connection.group_count(poles).ok_or_else(|| {
        SizingError::invariant(format!(
            "{} connection cannot be built with {poles} poles",
            connection.description()
        ))
    })
}

/// Factors from [`PARALLEL_FACTORS`] that divide `num_groups` evenly.
pub fn feasible_parallel_factors(num_groups: u32) -> Vec<u32> {
    if num_groups == 0 {
        return Vec::new();
    }
    PARALLEL_FACTORS
        .into_iter()
        .filter(|k1| num_groups % k1 == 0)
        .collect()
}
