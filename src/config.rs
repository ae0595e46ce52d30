//! Runtime configuration for connectivity generation.

use crate::errors::{GridError, GridResult};
use crate::float_types::Real;

/// First layer index where horizontal connections are modeled in the course grid.
pub const DEFAULT_RESERVOIR_START_LAYER: usize = 100;

/// How the `ihc` column of a connection table is written.
///
/// The course grid stores the cell width `delc` for horizontal connections and the
/// layer index for the self entry. Downstream readers that expect that layout need
/// [`IhcConvention::Legacy`]; everything else should use [`IhcConvention::Flag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IhcConvention {
    /// vertical `0`, horizontal `delc`, self entry = layer index
    #[default]
    Legacy,
    /// vertical `0`, horizontal `1`, self entry `0`
    Flag,
}

impl IhcConvention {
    /// `ihc` written for the self entry of a cell in layer `lay`.
    #[inline]
    pub const fn self_value(self, lay: usize) -> Real {
        match self {
            IhcConvention::Legacy => lay as Real,
            IhcConvention::Flag => 0.0,
        }
    }
}

/// Layer tiering and output conventions used when generating connections.
///
/// Layer `0` is always the top tier. Layers `1..reservoir_start_layer` are
/// overburden layers (vertical connections only); layers from
/// `reservoir_start_layer` on are reservoir layers that also connect horizontally.
/// The cut-off is a literal layer index and is never derived from `nlay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityConfig {
    pub reservoir_start_layer: usize,
    pub ihc_convention: IhcConvention,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityConfig {
    pub const fn new() -> Self {
        ConnectivityConfig {
            reservoir_start_layer: DEFAULT_RESERVOIR_START_LAYER,
            ihc_convention: IhcConvention::Legacy,
        }
    }

    pub const fn with_reservoir_start_layer(mut self, layer: usize) -> Self {
        self.reservoir_start_layer = layer;
        self
    }

    pub const fn with_ihc_convention(mut self, convention: IhcConvention) -> Self {
        self.ihc_convention = convention;
        self
    }

    /// Number of vertical-only layers below the top layer.
    #[inline]
    pub const fn overburden_layers(&self) -> usize {
        self.reservoir_start_layer.saturating_sub(1)
    }

    /// Whether a grid with `nlay` layers contains any reservoir layer.
    #[inline]
    pub const fn has_reservoir(&self, nlay: usize) -> bool {
        nlay > self.reservoir_start_layer
    }

    pub fn validate(&self) -> GridResult<()> {
        if self.reservoir_start_layer == 0 {
            return Err(GridError::InvalidConfig(
                "reservoir_start_layer must be at least 1; layer 0 is always the top tier"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
