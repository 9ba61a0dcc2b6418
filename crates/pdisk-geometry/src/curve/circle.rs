//! Circle curve.

use std::f64::consts::PI;

use pdisk_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A circle in the plane, parameterized over `[0, 2*PI]` counterclockwise
/// from the +x direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The unit circle at the origin: the boundary of the disk model.
    pub fn unit() -> Self {
        Self::new(Point2::ZERO, 1.0)
    }
}

impl Curve for Circle {
    fn point_at(&self, t: f64) -> Point2 {
        self.center + self.radius * Vector2::new(t.cos(), t.sin())
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        self.radius * Vector2::new(-t.sin(), t.cos())
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdisk_math::DVec2;

    #[test]
    fn test_circle_points_on_circle() {
        let circle = Circle::new(DVec2::ZERO, 1.0);
        for i in 0..8 {
            let t = i as f64 * PI / 4.0;
            let p = circle.point_at(t);
            let dist = p.length();
            assert!(
                (dist - 1.0).abs() < 1e-10,
                "Point at t={} not on circle: dist={}",
                t,
                dist
            );
        }
    }

    #[test]
    fn test_circle_cardinal_points() {
        let circle = Circle::new(DVec2::new(1.0, 2.0), 2.0);
        let p0 = circle.point_at(0.0);
        assert!((p0 - DVec2::new(3.0, 2.0)).length() < 1e-10);
        let p1 = circle.point_at(PI / 2.0);
        assert!((p1 - DVec2::new(1.0, 4.0)).length() < 1e-10);
        let p2 = circle.point_at(PI);
        assert!((p2 - DVec2::new(-1.0, 2.0)).length() < 1e-10);
    }

    #[test]
    fn test_circle_tangent_perpendicular() {
        let circle = Circle::unit();
        for i in 0..8 {
            let t = i as f64 * PI / 4.0;
            let p = circle.point_at(t);
            let tang = circle.tangent_at(t);
            let dot = p.dot(tang);
            assert!(
                dot.abs() < 1e-10,
                "Tangent not perpendicular at t={}: dot={}",
                t,
                dot
            );
        }
    }

    #[test]
    fn test_circle_is_closed() {
        assert!(Circle::unit().is_closed());
    }

    #[test]
    fn test_circle_domain() {
        let (a, b) = Circle::unit().domain();
        assert!((a - 0.0).abs() < 1e-10);
        assert!((b - 2.0 * PI).abs() < 1e-10);
    }
}
