//! `DisuGrid`: everything needed to describe a column grid as an unstructured grid.

use crate::config::ConnectivityConfig;
use crate::connectivity::ConnectionTable;
use crate::errors::GridResult;
use crate::faux_grid::FauxStructuredGrid;
use crate::float_types::Real;
use crate::grid::GridDescription;
use crate::layout::{Cell2d, VertexLayout};

/// Connection table, vertex layout and `cell2d` records of one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DisuGrid {
    pub grid: GridDescription,
    pub config: ConnectivityConfig,
    pub table: ConnectionTable,
    pub layout: VertexLayout,
    pub cell2d: Vec<Cell2d>,
}

impl DisuGrid {
    /// Build every part of the DISU description, failing as a whole.
    pub fn build(grid: GridDescription, config: ConnectivityConfig) -> GridResult<Self> {
        let table = ConnectionTable::build(&grid, &config)?;
        let layout = VertexLayout::build(&grid)?;
        let cell2d = layout.cell2d(&grid)?;
        log::debug!(
            "disu grid: {} nodes, nja = {}, {} vertices",
            table.nodes(),
            table.nja(),
            layout.nvert()
        );
        Ok(DisuGrid {
            grid,
            config,
            table,
            layout,
            cell2d,
        })
    }

    #[inline]
    pub fn nodes(&self) -> usize {
        self.grid.ncells()
    }

    #[inline]
    pub fn nja(&self) -> usize {
        self.table.nja()
    }

    #[inline]
    pub fn nvert(&self) -> usize {
        self.layout.nvert()
    }

    /// Top elevation of every cell, indexed by node.
    pub fn top(&self) -> Vec<Real> {
        let botm = self.grid.botm();
        let above = &botm[..botm.len().saturating_sub(1)];
        self.per_cell(std::iter::once(self.grid.top_overburden()).chain(above.iter().copied()))
    }

    /// Bottom elevation of every cell, indexed by node.
    pub fn bot(&self) -> Vec<Real> {
        self.per_cell(self.grid.botm().iter().copied())
    }

    /// Plan-view area of every cell, indexed by node.
    pub fn area(&self) -> Vec<Real> {
        vec![self.grid.cell_area(); self.nodes()]
    }

    /// Repeat one value per layer across that layer's columns.
    fn per_cell(&self, per_layer: impl Iterator<Item = Real>) -> Vec<Real> {
        let ncol = self.grid.ncol();
        per_layer
            .flat_map(|v| std::iter::repeat_n(v, ncol))
            .collect()
    }

    /// Regular-grid stand-in with `nrow` rows, for plotting.
    pub fn faux_grid(&self, nrow: usize) -> GridResult<FauxStructuredGrid> {
        FauxStructuredGrid::from_grid(&self.grid, nrow)
    }
}
