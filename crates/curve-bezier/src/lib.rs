//! Quadratic and cubic Bezier curves in 2D and 3D.
//!
//! Every evaluator exists as a free function over raw control points and as
//! a method on the matching curve value type. Points are evaluated at a
//! curve parameter `t ∈ [0, 1]`, or at a time value inside a
//! `[start, end]` window that is mapped onto `[0, 1]` first.
//!
//! ```
//! use curve_bezier::CubicBezierCurve3D;
//! use curve_math::dvec3;
//!
//! let curve = CubicBezierCurve3D::new(
//!     dvec3(-4.0, -4.0, -3.0),
//!     dvec3(-2.0, 4.0, 0.0),
//!     dvec3(2.0, -4.0, 3.0),
//!     dvec3(4.0, 4.0, 0.0),
//! );
//!
//! let mid = curve.point(0.5)?;
//! assert!((mid - dvec3(0.0, 0.0, 0.75)).length() < 1e-10);
//!
//! // Same point, addressed as time 3 of a 2..4 window.
//! let timed = curve.point_windowed(3.0, 2.0, 4.0)?;
//! assert_eq!(mid, timed);
//! # Ok::<(), curve_core::CurveError>(())
//! ```

mod bridge;
pub mod curve;

pub use curve::{
    cubic_point, cubic_point_windowed, cubic_velocity, cubic_velocity_windowed,
    quadratic_as_cubic, quadratic_point, quadratic_point_windowed, quadratic_velocity,
    quadratic_velocity_windowed, CubicBezier, CubicBezierCurve2D, CubicBezierCurve3D, Curve,
    QuadraticBezier, QuadraticBezierCurve2D, QuadraticBezierCurve3D,
};
pub use curve_core::{CurveError, Result, TimeWindow, Tolerance};
