//! Curve trait and Bezier implementations.

mod cubic;
mod quadratic;

use curve_core::{Result, TimeWindow};
use curve_math::ControlPoint;

pub use cubic::{
    cubic_point, cubic_point_windowed, cubic_velocity, cubic_velocity_windowed, CubicBezier,
    CubicBezierCurve2D, CubicBezierCurve3D,
};
pub use quadratic::{
    quadratic_as_cubic, quadratic_point, quadratic_point_windowed, quadratic_velocity,
    quadratic_velocity_windowed, QuadraticBezier, QuadraticBezierCurve2D, QuadraticBezierCurve3D,
};

/// Trait for parametric curves evaluated over `t ∈ [0, 1]`.
pub trait Curve: Send + Sync {
    type Point: ControlPoint;

    /// Evaluate the curve at parameter `t`.
    fn point(&self, t: f64) -> Result<Self::Point>;

    /// Evaluate the first derivative at parameter `t`.
    fn velocity(&self, t: f64) -> Result<Self::Point>;

    /// Evaluate the curve at time `t` inside `window`.
    fn point_in(&self, t: f64, window: TimeWindow) -> Result<Self::Point> {
        self.point(window.to_parameter(t)?)
    }

    /// Evaluate the first derivative at time `t` inside `window`.
    fn velocity_in(&self, t: f64, window: TimeWindow) -> Result<Self::Point> {
        self.velocity(window.to_parameter(t)?)
    }

    fn start_point(&self) -> Self::Point;

    fn end_point(&self) -> Self::Point;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
