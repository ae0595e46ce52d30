//! Planar vertex layout and `cell2d` records of a layered column grid.
//!
//! Every layer of the column grid shares the same plan-view geometry, so only the
//! top layer's footprints are computed; each column's vertex ids are then reused
//! for the cells below it.

use crate::errors::{GridError, GridResult};
use crate::float_types::Real;
use crate::grid::GridDescription;
use crate::vertex::{Footprint, VertexRegistry};
use nalgebra::Point2;

/// A vertex id with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRecord {
    pub id: usize,
    pub x: Real,
    pub y: Real,
}

/// Plan-view description of one cell: its center and its four vertex ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell2d {
    pub node: usize,
    pub xc: Real,
    pub yc: Real,
    pub vertices: [usize; 4],
}

impl Cell2d {
    /// Every cell of the column grid is a rectangle.
    pub const NCVERT: usize = 4;

    #[inline]
    pub const fn ncvert(&self) -> usize {
        Self::NCVERT
    }
}

/// Deduplicated vertices plus the cell → vertex-id lookup for every cell.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexLayout {
    vertex_ids: Vec<usize>,
    xv: Vec<Real>,
    yv: Vec<Real>,
    cell_vertices: Vec<[usize; 4]>,
}

impl VertexLayout {
    /// Footprint of column `col`: x from `col*delr` to `(col+1)*delr`,
    /// y from `0` (front) to the row depth `delc` (back).
    pub fn column_footprint(grid: &GridDescription, col: usize) -> Footprint {
        // both edges as multiples of delr so neighbouring columns share exact coordinates
        let left = col as Real * grid.delr();
        let right = (col + 1) as Real * grid.delr();
        let front = 0.0;
        let back = grid.delc();
        [
            Point2::new(left, back),
            Point2::new(right, back),
            Point2::new(right, front),
            Point2::new(left, front),
        ]
    }

    /// Build the layout for every cell of `grid`.
    ///
    /// The grid is validated before any vertex is registered and nothing is
    /// returned on failure.
    pub fn build(grid: &GridDescription) -> GridResult<Self> {
        grid.validate()?;

        let ncol = grid.ncol();
        let mut registry = VertexRegistry::with_capacity(2 * (ncol + 1));
        let mut top_layer = Vec::with_capacity(ncol);
        for col in 0..ncol {
            let footprint = Self::column_footprint(grid, col);
            registry = registry.register(&footprint);
            let ids = registry.resolve(col, &footprint)?;
            log::trace!("column {col}: vertices {ids:?}");
            top_layer.push(ids);
        }

        let cell_vertices: Vec<[usize; 4]> = (0..grid.nlay())
            .flat_map(|_| top_layer.iter().copied())
            .collect();

        log::debug!(
            "vertex layout built: {} vertices for {} cells",
            registry.len(),
            cell_vertices.len()
        );

        Ok(VertexLayout {
            vertex_ids: registry.ids(),
            xv: registry.xv(),
            yv: registry.yv(),
            cell_vertices,
        })
    }

    #[inline]
    pub fn nvert(&self) -> usize {
        self.vertex_ids.len()
    }

    #[inline]
    pub fn vertex_ids(&self) -> &[usize] {
        &self.vertex_ids
    }

    #[inline]
    pub fn xv(&self) -> &[Real] {
        &self.xv
    }

    #[inline]
    pub fn yv(&self) -> &[Real] {
        &self.yv
    }

    /// Vertex ids of every cell, indexed by node.
    #[inline]
    pub fn cell_vertices(&self) -> &[[usize; 4]] {
        &self.cell_vertices
    }

    pub fn vertices_of(&self, n: usize) -> GridResult<[usize; 4]> {
        self.cell_vertices
            .get(n)
            .copied()
            .ok_or(GridError::NodeOutOfRange {
                node: n,
                ncells: self.cell_vertices.len(),
            })
    }

    pub fn vertices(&self) -> Vec<VertexRecord> {
        self.vertex_ids
            .iter()
            .zip(self.xv.iter().zip(&self.yv))
            .map(|(&id, (&x, &y))| VertexRecord { id, x, y })
            .collect()
    }

    /// `cell2d` records for every cell of `grid`.
    pub fn cell2d(&self, grid: &GridDescription) -> GridResult<Vec<Cell2d>> {
        if grid.ncells() != self.cell_vertices.len() {
            return Err(GridError::NodeOutOfRange {
                node: grid.ncells(),
                ncells: self.cell_vertices.len(),
            });
        }
        self.cell_vertices
            .iter()
            .enumerate()
            .map(|(node, &vertices)| {
                let center = grid.cell_center(node)?;
                Ok(Cell2d {
                    node,
                    xc: center.x,
                    yc: center.y,
                    vertices,
                })
            })
            .collect()
    }
}
