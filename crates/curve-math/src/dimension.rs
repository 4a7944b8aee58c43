//! Moving points between the plane and 3D space.

use crate::{DVec2, DVec3};

/// Lift a planar point into 3D space on the `z = 0` plane.
pub trait Lift {
    fn lift(self) -> DVec3;
}

/// Project a 3D point onto the XY plane by dropping `z`.
pub trait ProjectXy {
    fn xy(self) -> DVec2;
}

impl Lift for DVec2 {
    fn lift(self) -> DVec3 {
        self.extend(0.0)
    }
}

impl ProjectXy for DVec3 {
    fn xy(self) -> DVec2 {
        self.truncate()
    }
}
