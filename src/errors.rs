//! Grid construction errors

use crate::float_types::Real;

/// Result alias used by every fallible operation in the crate.
pub type GridResult<T> = Result<T, GridError>;

/// All the possible issues we might encounter while describing or building a grid
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// (InvalidDimension) A layer or column count is zero
    #[error("(InvalidDimension) {name} must be greater than zero, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    /// (NonPositiveWidth) A cell width is zero or negative
    #[error("(NonPositiveWidth) {name} must be positive, got {value}")]
    NonPositiveWidth { name: &'static str, value: Real },

    /// (NonFiniteValue) An input value is NaN or infinite
    #[error("(NonFiniteValue) {name} has a NaN or infinite value")]
    NonFiniteValue { name: &'static str },

    /// (BotmLength) The number of layer bottoms does not match the number of layers
    #[error("(BotmLength) expected {expected} layer bottoms, got {actual}")]
    BotmLength { expected: usize, actual: usize },

    /// (NonMonotonicBotm) A layer bottom is not strictly below the top of that layer
    #[error("(NonMonotonicBotm) layer {layer} bottom ({bottom}) is not below its top ({top})")]
    NonMonotonicBotm { layer: usize, top: Real, bottom: Real },

    /// (CellOutOfRange) A (layer, column) pair lies outside the grid
    #[error("(CellOutOfRange) cell (lay={lay}, col={col}) is outside a {nlay}x{ncol} grid")]
    CellOutOfRange { lay: usize, col: usize, nlay: usize, ncol: usize },

    /// (NodeOutOfRange) A linear cell index lies outside the grid
    #[error("(NodeOutOfRange) node {node} is outside a grid of {ncells} cells")]
    NodeOutOfRange { node: usize, ncells: usize },

    /// (MissingNeighbor) A connection was requested toward a cell that cannot exist
    #[error("(MissingNeighbor) node {node} has no neighbor in direction {direction}")]
    MissingNeighbor { node: usize, direction: &'static str },

    /// (TierBoundary) Reservoir layers need at least two columns for horizontal connections
    #[error(
        "(TierBoundary) reservoir layers start at layer {reservoir_start_layer} of {nlay}, \
         which needs at least 2 columns, got {ncol}"
    )]
    TierBoundary { reservoir_start_layer: usize, nlay: usize, ncol: usize },

    /// (DegenerateFootprint) A cell footprint did not resolve to four distinct vertices
    #[error("(DegenerateFootprint) cell {cell} resolved to {resolved} distinct vertices, expected 4")]
    DegenerateFootprint { cell: usize, resolved: usize },

    /// (InvalidConfig) The connectivity configuration is unusable
    #[error("(InvalidConfig) {0}")]
    InvalidConfig(String),

    /// (InvalidLayering) Layer thickness generation received unusable parameters
    #[error("(InvalidLayering) {0}")]
    InvalidLayering(String),

    /// (InconsistentTable) A flattened connection table breaks a DISU invariant
    #[error("(InconsistentTable) {0}")]
    InconsistentTable(String),
}
