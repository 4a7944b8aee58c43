//! Curve parameter range checks.

use tracing::debug;

use crate::error::{CurveError, Result};

/// Lower bound of the canonical curve parameter.
pub const T_MIN: f64 = 0.0;
/// Upper bound of the canonical curve parameter.
pub const T_MAX: f64 = 1.0;

/// Fail with [`CurveError::InvalidParameter`] unless `lower <= t <= upper`.
///
/// NaN is never inside an interval and is rejected as well.
pub fn check_parameter(t: f64, lower: f64, upper: f64) -> Result<()> {
    if t >= lower && t <= upper {
        return Ok(());
    }
    debug!(t, lower, upper, "curve parameter out of range");
    Err(CurveError::invalid_parameter(t, lower, upper))
}

/// Check `t` against the canonical `[0, 1]` interval.
pub fn check_unit(t: f64) -> Result<()> {
    check_parameter(t, T_MIN, T_MAX)
}
