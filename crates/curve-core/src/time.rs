//! Mapping of time values onto the canonical curve parameter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CurveError, Result};
use crate::param::{check_parameter, T_MAX, T_MIN};
use crate::traits::Validate;

/// Map `t` from `[start, end]` onto `[0, 1]`.
///
/// No clamping is applied and no ordering between `start` and `end` is
/// enforced. When `start == end` the result is not finite.
pub fn normalize(t: f64, start: f64, end: f64) -> f64 {
    (t - start) / (end - start)
}

/// A `[start, end]` time window that a curve is traversed over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The canonical `[0, 1]` window.
    pub fn unit() -> Self {
        Self::new(T_MIN, T_MAX)
    }

    /// Bounds sorted ascending, so a reversed window has the same extent.
    pub fn bounds(&self) -> (f64, f64) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Unchecked mapping of `t` onto the curve parameter, see [`normalize`].
    pub fn normalize(&self, t: f64) -> f64 {
        normalize(t, self.start, self.end)
    }

    /// Validate the window and `t` against it, then normalize.
    ///
    /// A reversed window (`start > end`) is accepted and maps `start` to 0,
    /// so the curve is traversed backwards. A window too wide to subtract in
    /// `f64` reports the caller's `t` against the window bounds.
    pub fn to_parameter(&self, t: f64) -> Result<f64> {
        self.validate()?;
        let (lower, upper) = self.bounds();
        check_parameter(t, lower, upper)?;
        let u = self.normalize(t);
        if !u.is_finite() {
            debug!(t, lower, upper, "time window overflows f64");
            return Err(CurveError::invalid_parameter(t, lower, upper));
        }
        Ok(u)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::unit()
    }
}

impl Validate for TimeWindow {
    fn validate(&self) -> Result<()> {
        if self.start == self.end || !self.start.is_finite() || !self.end.is_finite() {
            debug!(start = self.start, end = self.end, "degenerate time window");
            return Err(CurveError::DegenerateWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}
