//! Traits defining connection generation for dependency inversion

use super::{ConnectionRecord, ConnectionTable};
use crate::config::ConnectivityConfig;
use crate::errors::GridResult;
use crate::grid::GridDescription;

/// Core connection generation trait
pub trait ConnectivityOps {
    /// Connection records for every cell of `grid`, ordered by node.
    fn records(
        &self,
        grid: &GridDescription,
        config: &ConnectivityConfig,
    ) -> GridResult<Vec<ConnectionRecord>>;

    /// Flattened DISU table for every cell of `grid`.
    fn connection_table(
        &self,
        grid: &GridDescription,
        config: &ConnectivityConfig,
    ) -> GridResult<ConnectionTable> {
        let records = self.records(grid, config)?;
        let table = ConnectionTable::from_records(&records, config.ihc_convention);
        log::debug!(
            "connection table built: {} nodes, nja = {}",
            table.nodes(),
            table.nja()
        );
        Ok(table)
    }
}
