pub mod aabb;
pub mod angle;

pub use glam::DVec2;
pub use aabb::Aabb2;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
