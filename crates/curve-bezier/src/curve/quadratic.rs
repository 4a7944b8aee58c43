//! Quadratic Bezier curves, evaluated through their cubic elevation.

use curve_core::traits::BoundingBox;
use curve_core::{Result, Tolerance};
use curve_math::{Aabb, ControlPoint, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::cubic::{
    cubic_point, cubic_point_windowed, cubic_velocity, cubic_velocity_windowed, CubicBezier,
};
use super::Curve;

/// Degree elevation: the cubic control points tracing the same curve as the
/// quadratic `p0, p1, p2`.
///
/// ```text
/// c0 = p0
/// c1 = 2/3 p1 + 1/3 p0
/// c2 = 2/3 p1 + 1/3 p2
/// c3 = p2
/// ```
pub fn quadratic_as_cubic<P: ControlPoint>(p0: P, p1: P, p2: P) -> (P, P, P, P) {
    let c1 = p1 * (2.0 / 3.0) + p0 * (1.0 / 3.0);
    let c2 = p1 * (2.0 / 3.0) + p2 * (1.0 / 3.0);
    (p0, c1, c2, p2)
}

pub fn quadratic_point<P: ControlPoint>(p0: P, p1: P, p2: P, t: f64) -> Result<P> {
    let (c0, c1, c2, c3) = quadratic_as_cubic(p0, p1, p2);
    cubic_point(c0, c1, c2, c3, t)
}

pub fn quadratic_point_windowed<P: ControlPoint>(
    p0: P,
    p1: P,
    p2: P,
    t: f64,
    start: f64,
    end: f64,
) -> Result<P> {
    let (c0, c1, c2, c3) = quadratic_as_cubic(p0, p1, p2);
    cubic_point_windowed(c0, c1, c2, c3, t, start, end)
}

pub fn quadratic_velocity<P: ControlPoint>(p0: P, p1: P, p2: P, t: f64) -> Result<P> {
    let (c0, c1, c2, c3) = quadratic_as_cubic(p0, p1, p2);
    cubic_velocity(c0, c1, c2, c3, t)
}

pub fn quadratic_velocity_windowed<P: ControlPoint>(
    p0: P,
    p1: P,
    p2: P,
    t: f64,
    start: f64,
    end: f64,
) -> Result<P> {
    let (c0, c1, c2, c3) = quadratic_as_cubic(p0, p1, p2);
    cubic_velocity_windowed(c0, c1, c2, c3, t, start, end)
}

/// A quadratic Bezier curve defined by a start point, one control point
/// and an end point.
///
/// # Example
///
/// ```
/// use curve_bezier::QuadraticBezier;
/// use curve_math::dvec2;
///
/// let curve = QuadraticBezier::new(dvec2(-4.0, -4.0), dvec2(2.0, -4.0), dvec2(4.0, 4.0));
/// let p = curve.point(0.25).unwrap();
/// assert!((p - dvec2(-1.25, -3.5)).length() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier<P> {
    p0: P,
    p1: P,
    p2: P,
}

pub type QuadraticBezierCurve2D = QuadraticBezier<DVec2>;
pub type QuadraticBezierCurve3D = QuadraticBezier<DVec3>;

impl<P: ControlPoint> QuadraticBezier<P> {
    pub fn new(p0: P, p1: P, p2: P) -> Self {
        Self { p0, p1, p2 }
    }

    /// The start point.
    pub fn p0(&self) -> P {
        self.p0
    }

    /// The control point.
    pub fn p1(&self) -> P {
        self.p1
    }

    /// The end point.
    pub fn p2(&self) -> P {
        self.p2
    }

    pub fn control_points(&self) -> [P; 3] {
        [self.p0, self.p1, self.p2]
    }

    pub fn point(&self, t: f64) -> Result<P> {
        quadratic_point(self.p0, self.p1, self.p2, t)
    }

    pub fn point_windowed(&self, t: f64, start: f64, end: f64) -> Result<P> {
        quadratic_point_windowed(self.p0, self.p1, self.p2, t, start, end)
    }

    pub fn velocity(&self, t: f64) -> Result<P> {
        quadratic_velocity(self.p0, self.p1, self.p2, t)
    }

    pub fn velocity_windowed(&self, t: f64, start: f64, end: f64) -> Result<P> {
        quadratic_velocity_windowed(self.p0, self.p1, self.p2, t, start, end)
    }

    /// The same curve expressed as a cubic.
    pub fn as_cubic(&self) -> CubicBezier<P> {
        let (c0, c1, c2, c3) = quadratic_as_cubic(self.p0, self.p1, self.p2);
        CubicBezier::new(c0, c1, c2, c3)
    }

    pub fn map<Q: ControlPoint>(&self, f: impl Fn(P) -> Q) -> QuadraticBezier<Q> {
        QuadraticBezier::new(f(self.p0), f(self.p1), f(self.p2))
    }

    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.p0.approx_eq(other.p0, tol)
            && self.p1.approx_eq(other.p1, tol)
            && self.p2.approx_eq(other.p2, tol)
    }

    pub fn control_hull(&self) -> Aabb<P> {
        Aabb::new(
            self.p0.component_min(self.p1).component_min(self.p2),
            self.p0.component_max(self.p1).component_max(self.p2),
        )
    }
}

impl<P: ControlPoint> From<QuadraticBezier<P>> for CubicBezier<P> {
    fn from(curve: QuadraticBezier<P>) -> Self {
        curve.as_cubic()
    }
}

/// Consistent with `==`: `-0.0` and `0.0` coordinates hash alike.
impl<P: ControlPoint> Hash for QuadraticBezier<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.p0.hash_components(state);
        self.p1.hash_components(state);
        self.p2.hash_components(state);
    }
}

impl<P: ControlPoint + Send + Sync> Curve for QuadraticBezier<P> {
    type Point = P;

    fn point(&self, t: f64) -> Result<P> {
        QuadraticBezier::point(self, t)
    }

    fn velocity(&self, t: f64) -> Result<P> {
        QuadraticBezier::velocity(self, t)
    }

    fn start_point(&self) -> P {
        self.p0
    }

    fn end_point(&self) -> P {
        self.p2
    }
}

impl<P: ControlPoint> BoundingBox for QuadraticBezier<P> {
    type Point = P;

    fn bounding_box(&self) -> (P, P) {
        let hull = self.control_hull();
        (hull.min, hull.max)
    }
}
