//! Conversions between planar curves and curves in 3D space.
//!
//! Lifting places a planar curve on the `z = 0` plane; projecting drops the
//! `z` component of every control point. Both commute with evaluation, since
//! evaluation is component-wise.

use curve_math::{Lift, ProjectXy};

use crate::curve::{
    CubicBezierCurve2D, CubicBezierCurve3D, QuadraticBezierCurve2D, QuadraticBezierCurve3D,
};

impl CubicBezierCurve2D {
    pub fn lift(&self) -> CubicBezierCurve3D {
        self.map(Lift::lift)
    }
}

impl CubicBezierCurve3D {
    pub fn project_xy(&self) -> CubicBezierCurve2D {
        self.map(ProjectXy::xy)
    }
}

impl QuadraticBezierCurve2D {
    pub fn lift(&self) -> QuadraticBezierCurve3D {
        self.map(Lift::lift)
    }
}

impl QuadraticBezierCurve3D {
    pub fn project_xy(&self) -> QuadraticBezierCurve2D {
        self.map(ProjectXy::xy)
    }
}

impl From<CubicBezierCurve2D> for CubicBezierCurve3D {
    fn from(curve: CubicBezierCurve2D) -> Self {
        curve.lift()
    }
}

impl From<QuadraticBezierCurve2D> for QuadraticBezierCurve3D {
    fn from(curve: QuadraticBezierCurve2D) -> Self {
        curve.lift()
    }
}
