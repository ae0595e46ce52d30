//! Unstructured (**DISU**) connectivity and vertex layout for layered column
//! groundwater grids.
//!
//! A [`GridDescription`] (layers, columns, cell widths, overburden top and layer
//! bottoms) is turned into the per-cell connection arrays of an unstructured grid
//! (`iac`, `ja`, `ihc`, `cl12`, `hwva`, `angldeg`), a deduplicated vertex list with
//! a cell → vertex lookup, `cell2d` records, and a regular-grid stand-in for plotting.
//!
//! ```
//! use disugrid::{ConnectivityConfig, DisuGrid, GridDescription};
//!
//! let grid = GridDescription::new(3, 2, 1.0, 1.0, 10.0, vec![8.0, 6.0, 4.0])?;
//! let disu = DisuGrid::build(grid, ConnectivityConfig::default())?;
//! assert_eq!(disu.table.iac, vec![2, 2, 3, 3, 2, 2]);
//! assert_eq!(disu.nvert(), 6);
//! # Ok::<(), disugrid::GridError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **hashmap**: index registered vertices with hashbrown instead of a linear scan
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to generate per-cell connections

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

pub mod config;
pub mod connectivity;
pub mod disu;
pub mod errors;
pub mod faux_grid;
pub mod float_types;
pub mod grid;
pub mod layout;
pub mod vertex;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::{ConnectivityConfig, IhcConvention};
pub use connectivity::{
    Connection, ConnectionFlags, ConnectionKind, ConnectionRecord, ConnectionTable, Direction,
    LayerTier, assemble, cell_connections, classify,
};
pub use disu::DisuGrid;
pub use errors::{GridError, GridResult};
pub use faux_grid::FauxStructuredGrid;
pub use float_types::Real;
pub use grid::GridDescription;
pub use layout::{Cell2d, VertexLayout, VertexRecord};
pub use vertex::{Footprint, VertexRegistry};
