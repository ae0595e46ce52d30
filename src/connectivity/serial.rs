//! Serial implementation of connection generation

use super::traits::ConnectivityOps;
use super::{ConnectionRecord, cell_connections, check_tier_boundary};
use crate::config::ConnectivityConfig;
use crate::errors::GridResult;
use crate::grid::GridDescription;

/// Serial implementation of `ConnectivityOps`
pub struct SerialConnectivityOps;

impl SerialConnectivityOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialConnectivityOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityOps for SerialConnectivityOps {
    fn records(
        &self,
        grid: &GridDescription,
        config: &ConnectivityConfig,
    ) -> GridResult<Vec<ConnectionRecord>> {
        grid.validate()?;
        check_tier_boundary(grid, config)?;

        (0..grid.ncells())
            .map(|n| cell_connections(grid, config, n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GridError;

    #[test]
    fn records_cover_every_cell_in_order() {
        let grid = GridDescription::new(4, 3, 1.0, 1.0, 0.0, vec![-1.0, -2.0, -3.0, -4.0])
            .unwrap();
        let config = ConnectivityConfig::new().with_reservoir_start_layer(2);
        let records = SerialConnectivityOps::new().records(&grid, &config).unwrap();
        assert_eq!(records.len(), 12);
        assert!(records.iter().enumerate().all(|(n, r)| r.node == n));
        // layer 2 is a reservoir layer, layer 3 a trimmed reservoir layer
        assert_eq!(records[6].iac(), 4);
        assert_eq!(records[7].iac(), 5);
        assert_eq!(records[10].iac(), 4);
    }

    #[test]
    fn invalid_config_fails_before_any_cell() {
        let grid = GridDescription::new(2, 2, 1.0, 1.0, 0.0, vec![-1.0, -2.0]).unwrap();
        let config = ConnectivityConfig::new().with_reservoir_start_layer(0);
        assert!(matches!(
            SerialConnectivityOps::new().records(&grid, &config),
            Err(GridError::InvalidConfig(_))
        ));
    }
}
