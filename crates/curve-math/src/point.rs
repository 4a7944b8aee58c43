//! The vector type curves are evaluated over.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use curve_core::Tolerance;

use crate::{DVec2, DVec3};

/// A fixed-size `f64` vector usable as a Bezier control point.
///
/// Every operation is component-wise, so an evaluator written against this
/// trait gives the same x/y in 2D as in 3D with `z = 0`.
pub trait ControlPoint:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
    fn component_min(self, other: Self) -> Self;

    fn component_max(self, other: Self) -> Self;

    /// `true` if every component of `self` is `<=` the one in `other`.
    fn all_le(self, other: Self) -> bool;

    fn length(self) -> f64;

    fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    fn approx_eq(self, other: Self, tol: Tolerance) -> bool {
        self.distance(other) <= tol.linear
    }

    /// Feed the component bits to `state`, with `-0.0` hashed as `0.0` so
    /// that points equal under `==` hash equally.
    fn hash_components<H: Hasher>(self, state: &mut H);
}

macro_rules! impl_control_point {
    ($ty:ty) => {
        impl ControlPoint for $ty {
            fn component_min(self, other: Self) -> Self {
                self.min(other)
            }

            fn component_max(self, other: Self) -> Self {
                self.max(other)
            }

            fn all_le(self, other: Self) -> bool {
                self.cmple(other).all()
            }

            fn length(self) -> f64 {
                <$ty>::length(self)
            }

            fn hash_components<H: Hasher>(self, state: &mut H) {
                for c in self.to_array() {
                    let c = if c == 0.0 { 0.0 } else { c };
                    c.to_bits().hash(state);
                }
            }
        }
    };
}

impl_control_point!(DVec2);
impl_control_point!(DVec3);
