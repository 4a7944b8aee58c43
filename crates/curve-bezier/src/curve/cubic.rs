//! Cubic Bezier curves.

use curve_core::traits::BoundingBox;
use curve_core::{check_unit, Result, TimeWindow, Tolerance};
use curve_math::{Aabb, ControlPoint, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::Curve;

/// Evaluate the cubic Bernstein polynomial at `t ∈ [0, 1]`.
///
/// ```text
/// B(t) = (1-t)³p0 + 3(1-t)²t p1 + 3(1-t)t² p2 + t³p3
/// ```
///
/// At `t = 0` the result is exactly `p0`, at `t = 1` exactly `p3`.
pub fn cubic_point<P: ControlPoint>(p0: P, p1: P, p2: P, p3: P, t: f64) -> Result<P> {
    check_unit(t)?;
    let s = 1.0 - t;
    Ok(p0 * (s * s * s) + p1 * (3.0 * s * s * t) + p2 * (3.0 * s * t * t) + p3 * (t * t * t))
}

/// Evaluate the point at time `t` inside the `[start, end]` window.
pub fn cubic_point_windowed<P: ControlPoint>(
    p0: P,
    p1: P,
    p2: P,
    p3: P,
    t: f64,
    start: f64,
    end: f64,
) -> Result<P> {
    let t = TimeWindow::new(start, end).to_parameter(t)?;
    cubic_point(p0, p1, p2, p3, t)
}

/// Evaluate the first derivative at `t ∈ [0, 1]`.
///
/// ```text
/// B'(t) = 3(1-t)²(p1-p0) + 6(1-t)t(p2-p1) + 3t²(p3-p2)
/// ```
pub fn cubic_velocity<P: ControlPoint>(p0: P, p1: P, p2: P, p3: P, t: f64) -> Result<P> {
    check_unit(t)?;
    let s = 1.0 - t;
    Ok((p1 - p0) * (3.0 * s * s) + (p2 - p1) * (6.0 * s * t) + (p3 - p2) * (3.0 * t * t))
}

/// Evaluate the first derivative at time `t` inside the `[start, end]` window.
///
/// The derivative is taken with respect to the curve parameter, not to time.
pub fn cubic_velocity_windowed<P: ControlPoint>(
    p0: P,
    p1: P,
    p2: P,
    p3: P,
    t: f64,
    start: f64,
    end: f64,
) -> Result<P> {
    let t = TimeWindow::new(start, end).to_parameter(t)?;
    cubic_velocity(p0, p1, p2, p3, t)
}

/// A cubic Bezier curve defined by a start point, two control points and
/// an end point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier<P> {
    p0: P,
    p1: P,
    p2: P,
    p3: P,
}

pub type CubicBezierCurve2D = CubicBezier<DVec2>;
pub type CubicBezierCurve3D = CubicBezier<DVec3>;

impl<P: ControlPoint> CubicBezier<P> {
    pub fn new(p0: P, p1: P, p2: P, p3: P) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// The start point.
    pub fn p0(&self) -> P {
        self.p0
    }

    /// The first control point.
    pub fn p1(&self) -> P {
        self.p1
    }

    /// The second control point.
    pub fn p2(&self) -> P {
        self.p2
    }

    /// The end point.
    pub fn p3(&self) -> P {
        self.p3
    }

    pub fn control_points(&self) -> [P; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    pub fn point(&self, t: f64) -> Result<P> {
        cubic_point(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn point_windowed(&self, t: f64, start: f64, end: f64) -> Result<P> {
        cubic_point_windowed(self.p0, self.p1, self.p2, self.p3, t, start, end)
    }

    pub fn velocity(&self, t: f64) -> Result<P> {
        cubic_velocity(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn velocity_windowed(&self, t: f64, start: f64, end: f64) -> Result<P> {
        cubic_velocity_windowed(self.p0, self.p1, self.p2, self.p3, t, start, end)
    }

    /// Apply `f` to every control point.
    ///
    /// Bezier curves are affine invariant, so mapping the control points
    /// through an affine map maps the whole curve.
    pub fn map<Q: ControlPoint>(&self, f: impl Fn(P) -> Q) -> CubicBezier<Q> {
        CubicBezier::new(f(self.p0), f(self.p1), f(self.p2), f(self.p3))
    }

    /// Compare control points pairwise within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.control_points()
            .iter()
            .zip(other.control_points().iter())
            .all(|(&a, &b)| a.approx_eq(b, tol))
    }

    /// Box around the control polygon. The curve never leaves it.
    pub fn control_hull(&self) -> Aabb<P> {
        Aabb::new(
            self.p0.component_min(self.p1).component_min(self.p2).component_min(self.p3),
            self.p0.component_max(self.p1).component_max(self.p2).component_max(self.p3),
        )
    }
}

/// Consistent with `==`: `-0.0` and `0.0` coordinates hash alike.
impl<P: ControlPoint> Hash for CubicBezier<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.p0.hash_components(state);
        self.p1.hash_components(state);
        self.p2.hash_components(state);
        self.p3.hash_components(state);
    }
}

impl<P: ControlPoint + Send + Sync> Curve for CubicBezier<P> {
    type Point = P;

    fn point(&self, t: f64) -> Result<P> {
        CubicBezier::point(self, t)
    }

    fn velocity(&self, t: f64) -> Result<P> {
        CubicBezier::velocity(self, t)
    }

    fn start_point(&self) -> P {
        self.p0
    }

    fn end_point(&self) -> P {
        self.p3
    }
}

impl<P: ControlPoint> BoundingBox for CubicBezier<P> {
    type Point = P;

    fn bounding_box(&self) -> (P, P) {
        let hull = self.control_hull();
        (hull.min, hull.max)
    }
}
