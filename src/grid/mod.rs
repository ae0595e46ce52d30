//! `GridDescription`: the validated shape and elevations of a layered column grid.

use crate::errors::{GridError, GridResult};
use crate::float_types::{Real, tolerance};
use nalgebra::Point2;

pub mod layering;

pub use layering::{botm_from_thicknesses, geometric_botm, geometric_layer_thickness};

/// The column grid always has a single row.
pub const NROW: usize = 1;

/// Immutable description of a single-row, `nlay × ncol` grid.
///
/// Cells are numbered `n = lay * ncol + col`. Layer `lay` spans from its top
/// (`top_overburden` for layer 0, `botm[lay - 1]` otherwise) down to `botm[lay]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridDescription {
    nlay: usize,
    ncol: usize,
    delr: Real,
    delc: Real,
    top_overburden: Real,
    botm: Vec<Real>,
}

impl GridDescription {
    /// Create and validate a grid description.
    ///
    /// ## Errors
    /// Fails if a dimension is zero, a width is not positive, a value is not finite,
    /// `botm` has the wrong length, or any layer is thinner than [`tolerance`].
    pub fn new(
        nlay: usize,
        ncol: usize,
        delr: Real,
        delc: Real,
        top_overburden: Real,
        botm: Vec<Real>,
    ) -> GridResult<Self> {
        let grid = GridDescription {
            nlay,
            ncol,
            delr,
            delc,
            top_overburden,
            botm,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Check every invariant of the description.
    pub fn validate(&self) -> GridResult<()> {
        if self.nlay == 0 {
            return Err(GridError::InvalidDimension {
                name: "nlay",
                value: self.nlay,
            });
        }
        if self.ncol == 0 {
            return Err(GridError::InvalidDimension {
                name: "ncol",
                value: self.ncol,
            });
        }
        for (name, value) in [("delr", self.delr), ("delc", self.delc)] {
            if !value.is_finite() {
                return Err(GridError::NonFiniteValue { name });
            }
            if value <= 0.0 {
                return Err(GridError::NonPositiveWidth { name, value });
            }
        }
        if !self.top_overburden.is_finite() {
            return Err(GridError::NonFiniteValue {
                name: "top_overburden",
            });
        }
        if self.botm.len() != self.nlay {
            return Err(GridError::BotmLength {
                expected: self.nlay,
                actual: self.botm.len(),
            });
        }
        if self.botm.iter().any(|b| !b.is_finite()) {
            return Err(GridError::NonFiniteValue { name: "botm" });
        }

        let tol = tolerance();
        let mut top = self.top_overburden;
        for (layer, &bottom) in self.botm.iter().enumerate() {
            if top - bottom < tol {
                return Err(GridError::NonMonotonicBotm { layer, top, bottom });
            }
            top = bottom;
        }
        Ok(())
    }

    #[inline]
    pub const fn nlay(&self) -> usize {
        self.nlay
    }

    #[inline]
    pub const fn ncol(&self) -> usize {
        self.ncol
    }

    #[inline]
    pub const fn nrow(&self) -> usize {
        NROW
    }

    #[inline]
    pub const fn delr(&self) -> Real {
        self.delr
    }

    #[inline]
    pub const fn delc(&self) -> Real {
        self.delc
    }

    #[inline]
    pub const fn top_overburden(&self) -> Real {
        self.top_overburden
    }

    #[inline]
    pub fn botm(&self) -> &[Real] {
        &self.botm
    }

    #[inline]
    pub const fn ncells(&self) -> usize {
        self.nlay * self.ncol
    }

    /// Plan-view area of every cell.
    #[inline]
    pub fn cell_area(&self) -> Real {
        self.delr * self.delc
    }

    /// Linear index of the cell at `(lay, col)`.
    pub fn node(&self, lay: usize, col: usize) -> GridResult<usize> {
        self.check_cell(lay, col)?;
        Ok(lay * self.ncol + col)
    }

    /// `(lay, col)` of the cell with linear index `n`.
    pub fn layer_col(&self, n: usize) -> GridResult<(usize, usize)> {
        if n >= self.ncells() {
            return Err(GridError::NodeOutOfRange {
                node: n,
                ncells: self.ncells(),
            });
        }
        Ok((n / self.ncol, n % self.ncol))
    }

    pub(crate) fn check_cell(&self, lay: usize, col: usize) -> GridResult<()> {
        if lay >= self.nlay || col >= self.ncol {
            return Err(GridError::CellOutOfRange {
                lay,
                col,
                nlay: self.nlay,
                ncol: self.ncol,
            });
        }
        Ok(())
    }

    fn check_layer(&self, lay: usize) -> GridResult<()> {
        self.check_cell(lay, 0)
    }

    /// Top elevation of layer `lay`.
    pub fn layer_top(&self, lay: usize) -> GridResult<Real> {
        self.check_layer(lay)?;
        Ok(if lay == 0 {
            self.top_overburden
        } else {
            self.botm[lay - 1]
        })
    }

    /// Bottom elevation of layer `lay`.
    pub fn layer_bottom(&self, lay: usize) -> GridResult<Real> {
        self.check_layer(lay)?;
        Ok(self.botm[lay])
    }

    pub fn layer_thickness(&self, lay: usize) -> GridResult<Real> {
        Ok(self.layer_top(lay)? - self.layer_bottom(lay)?)
    }

    /// Half the thickness of layer `lay`.
    ///
    /// One value serves both vertical connections of a cell, the one to the cell
    /// above and the one to the cell below.
    pub fn half_thickness(&self, lay: usize) -> GridResult<Real> {
        Ok(self.layer_thickness(lay)? / 2.0)
    }

    /// Plan-view center of cell `n`: `x = delr/2 + col*delr`, `y = delc/2`.
    pub fn cell_center(&self, n: usize) -> GridResult<Point2<Real>> {
        let (_, col) = self.layer_col(n)?;
        Ok(Point2::new(
            self.delr / 2.0 + col as Real * self.delr,
            self.delc / 2.0,
        ))
    }
}
