// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used when validating layer geometry.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `DISUGRID_TOLERANCE` (e.g. `DISUGRID_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before building any grid
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-5
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Returns the smallest layer thickness accepted by grid validation.
/// If not set yet, it tries `DISUGRID_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a precision-dependent default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("DISUGRID_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `disugrid::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Angle of a connection pointing along the negative x-axis.
pub const NEGATIVE_X_DEG: Real = 180.0;

/// Angle of a connection pointing along the positive x-axis; also used for vertical connections.
pub const POSITIVE_X_DEG: Real = 0.0;

/// Angle written for the self entry of a DISU row.
pub const SELF_ENTRY_DEG: Real = 360.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_positive_and_small() {
        let tol = tolerance();
        assert!(tol >= Real::EPSILON);
        assert!(tol < 1e-3);
    }
}
