//! A regular-grid stand-in for plotting the elevations of a column grid.
//!
//! Unstructured grids are slow to render; the faux grid repeats the scalar top and
//! per-layer bottoms of a [`GridDescription`] over a full `nrow × ncol` plane so
//! structured plotting tools can draw cross sections. It is never used for simulation.

use crate::errors::{GridError, GridResult};
use crate::float_types::Real;
use crate::grid::GridDescription;
use ndarray::{Array1, Array2, Array3, Axis};

#[derive(Debug, Clone, PartialEq)]
pub struct FauxStructuredGrid {
    /// column widths, length `ncol`
    pub delr: Array1<Real>,
    /// row widths, length `nrow`
    pub delc: Array1<Real>,
    /// `nrow × ncol`
    pub top: Array2<Real>,
    /// `nlay × nrow × ncol`
    pub botm: Array3<Real>,
    pub xoff: Real,
    pub yoff: Real,
    pub angrot: Real,
}

impl FauxStructuredGrid {
    pub fn from_grid(grid: &GridDescription, nrow: usize) -> GridResult<Self> {
        if nrow == 0 {
            return Err(GridError::InvalidDimension {
                name: "nrow",
                value: nrow,
            });
        }
        grid.validate()?;

        let (nlay, ncol) = (grid.nlay(), grid.ncol());
        let top = Array2::from_elem((nrow, ncol), grid.top_overburden());
        let mut botm = Array3::zeros((nlay, nrow, ncol));
        for (mut layer, &bottom) in botm.axis_iter_mut(Axis(0)).zip(grid.botm()) {
            layer.fill(bottom);
        }

        Ok(FauxStructuredGrid {
            delr: Array1::from_elem(ncol, grid.delr()),
            delc: Array1::from_elem(nrow, grid.delc()),
            top,
            botm,
            xoff: 0.0,
            yoff: 0.0,
            angrot: 0.0,
        })
    }

    /// `(nlay, nrow, ncol)`
    pub fn shape(&self) -> (usize, usize, usize) {
        let (nlay, nrow, ncol) = self.botm.dim();
        (nlay, nrow, ncol)
    }

    /// `(xmin, xmax, ymin, ymax)` of the unrotated grid.
    pub fn extent(&self) -> (Real, Real, Real, Real) {
        (
            self.xoff,
            self.xoff + self.delr.sum(),
            self.yoff,
            self.yoff + self.delc.sum(),
        )
    }

    /// x of each column center.
    pub fn xcellcenters(&self) -> Array1<Real> {
        let mut x = self.xoff;
        self.delr.mapv(|w| {
            let center = x + w / 2.0;
            x += w;
            center
        })
    }

    /// y of each row center; row 0 is the back (largest y) row.
    pub fn ycellcenters(&self) -> Array1<Real> {
        let mut y = self.yoff + self.delc.sum();
        self.delc.mapv(|w| {
            let center = y - w / 2.0;
            y -= w;
            center
        })
    }

    /// Per-cell layer thickness, `nlay × nrow × ncol`.
    pub fn thickness(&self) -> Array3<Real> {
        let mut thick = self.botm.clone();
        let (nlay, _, _) = self.shape();
        for lay in 0..nlay {
            let above = if lay == 0 {
                self.top.clone()
            } else {
                self.botm.index_axis(Axis(0), lay - 1).to_owned()
            };
            let mut layer = thick.index_axis_mut(Axis(0), lay);
            layer.zip_mut_with(&above, |b, &t| *b = t - *b);
        }
        thick
    }
}
