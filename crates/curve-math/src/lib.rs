pub mod aabb;
pub mod dimension;
pub mod point;

pub use aabb::Aabb;
pub use dimension::{Lift, ProjectXy};
pub use glam::{dvec2, dvec3, DVec2, DVec3};
pub use point::ControlPoint;
