use crate::ControlPoint;
use serde::{Deserialize, Serialize};

/// Axis-aligned box bounding a set of control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb<P> {
    pub min: P,
    pub max: P,
}

impl<P: ControlPoint> Aabb<P> {
    pub fn new(min: P, max: P) -> Self {
        Self { min, max }
    }

    /// Inclusive on every face.
    pub fn contains_point(&self, p: P) -> bool {
        self.min.all_le(p) && p.all_le(self.max)
    }
}
