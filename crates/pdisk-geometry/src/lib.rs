//! PDiskStudio geometry: curves in the plane, hyperbolic geodesics of the
//! Poincare disk model, and ideal triangles bounded by them.

pub mod curve;
pub mod geodesic;
pub mod ideal;
pub mod tessellate;

pub use curve::{Arc, Circle, Curve, Segment};
pub use geodesic::Geodesic;
pub use ideal::IdealTriangle;
