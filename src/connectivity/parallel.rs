//! Parallel implementation of connection generation

use super::traits::ConnectivityOps;
use super::{ConnectionRecord, cell_connections, check_tier_boundary};
use crate::config::ConnectivityConfig;
use crate::errors::GridResult;
use crate::grid::GridDescription;
use rayon::prelude::*;

/// Parallel implementation of `ConnectivityOps`; cells are classified independently.
pub struct ParallelConnectivityOps;

impl ParallelConnectivityOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelConnectivityOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityOps for ParallelConnectivityOps {
    fn records(
        &self,
        grid: &GridDescription,
        config: &ConnectivityConfig,
    ) -> GridResult<Vec<ConnectionRecord>> {
        grid.validate()?;
        check_tier_boundary(grid, config)?;

        (0..grid.ncells())
            .into_par_iter()
            .map(|n| cell_connections(grid, config, n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::SerialConnectivityOps;

    #[test]
    fn matches_serial_output() {
        let botm: Vec<_> = (1..=8).map(|k| -(k as crate::float_types::Real)).collect();
        let grid = GridDescription::new(8, 5, 2.0, 3.0, 0.0, botm).unwrap();
        let config = ConnectivityConfig::new().with_reservoir_start_layer(4);

        let serial = SerialConnectivityOps::new()
            .connection_table(&grid, &config)
            .unwrap();
        let parallel = ParallelConnectivityOps::new()
            .connection_table(&grid, &config)
            .unwrap();
        assert_eq!(serial, parallel);
    }
}
