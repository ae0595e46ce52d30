//! Helpers that turn layer thicknesses into `botm` sequences.

use crate::errors::{GridError, GridResult};
use crate::float_types::Real;

/// Thickness of the first layer when `thk` is split into `nlay` layers that each
/// grow by the factor `mult`: `thk * (mult - 1) / (mult^nlay - 1)`.
///
/// A `mult` of exactly `1` is uniform layering, `thk / nlay`.
pub fn geometric_layer_thickness(thk: Real, nlay: usize, mult: Real) -> GridResult<Real> {
    if nlay == 0 {
        return Err(GridError::InvalidDimension {
            name: "nlay",
            value: nlay,
        });
    }
    if !thk.is_finite() || !mult.is_finite() {
        return Err(GridError::NonFiniteValue {
            name: "layering parameters",
        });
    }
    if thk <= 0.0 {
        return Err(GridError::InvalidLayering(format!(
            "total thickness must be positive, got {thk}"
        )));
    }
    if mult <= 0.0 {
        return Err(GridError::InvalidLayering(format!(
            "thickness multiplier must be positive, got {mult}"
        )));
    }

    if mult == 1.0 {
        return Ok(thk / nlay as Real);
    }
    let denom = mult.powi(nlay as i32) - 1.0;
    let first = thk * ((mult - 1.0) / denom);
    if !first.is_finite() || first <= 0.0 {
        return Err(GridError::InvalidLayering(format!(
            "multiplier {mult} over {nlay} layers produces a degenerate first layer"
        )));
    }
    Ok(first)
}

/// Accumulate per-layer thicknesses downward from `top` into layer bottoms.
pub fn botm_from_thicknesses(top: Real, thicknesses: &[Real]) -> GridResult<Vec<Real>> {
    if !top.is_finite() {
        return Err(GridError::NonFiniteValue { name: "top" });
    }
    let mut botm = Vec::with_capacity(thicknesses.len());
    let mut elevation = top;
    for (layer, &thk) in thicknesses.iter().enumerate() {
        if !thk.is_finite() || thk <= 0.0 {
            return Err(GridError::InvalidLayering(format!(
                "layer {layer} thickness must be positive, got {thk}"
            )));
        }
        elevation -= thk;
        botm.push(elevation);
    }
    Ok(botm)
}

/// Layer bottoms for `thk` split geometrically into `nlay` layers, thinnest at `top`.
pub fn geometric_botm(top: Real, thk: Real, nlay: usize, mult: Real) -> GridResult<Vec<Real>> {
    let first = geometric_layer_thickness(thk, nlay, mult)?;
    let thicknesses: Vec<Real> = std::iter::successors(Some(first), |t| Some(t * mult))
        .take(nlay)
        .collect();
    let mut botm = botm_from_thicknesses(top, &thicknesses)?;
    // land the last bottom exactly on top - thk
    if let Some(last) = botm.last_mut() {
        *last = top - thk;
    }
    Ok(botm)
}
