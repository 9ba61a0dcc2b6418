//! Circular arc curve.

use pdisk_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A circular arc, parameterized over `[0, 1]`.
///
/// The arc starts at angle `start_angle` on the circle `(center, radius)`
/// and sweeps by the signed angle `sweep`: positive counterclockwise,
/// negative clockwise. Parameter direction follows the sweep, so
/// `point_at(0.0)` is the start and `point_at(1.0)` the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl Arc {
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// Angle on the carrier circle at parameter `t`.
    pub fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + t * self.sweep
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    /// Arc length `radius * |sweep|`.
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }
}

impl Curve for Arc {
    fn point_at(&self, t: f64) -> Point2 {
        let a = self.angle_at(t);
        self.center + self.radius * Vector2::new(a.cos(), a.sin())
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        let a = self.angle_at(t);
        self.radius * self.sweep * Vector2::new(-a.sin(), a.cos())
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdisk_math::DVec2;
    use std::f64::consts::PI;

    #[test]
    fn test_arc_endpoints() {
        let arc = Arc::new(DVec2::ZERO, 2.0, 0.0, PI / 2.0);
        let p0 = arc.point_at(0.0);
        let p1 = arc.point_at(1.0);
        assert!((p0 - DVec2::new(2.0, 0.0)).length() < 1e-10);
        assert!((p1 - DVec2::new(0.0, 2.0)).length() < 1e-10);
    }

    #[test]
    fn test_arc_negative_sweep_runs_clockwise() {
        let arc = Arc::new(DVec2::ZERO, 1.0, PI / 2.0, -PI / 2.0);
        let p0 = arc.point_at(0.0);
        let p1 = arc.point_at(1.0);
        assert!((p0 - DVec2::new(0.0, 1.0)).length() < 1e-10);
        assert!((p1 - DVec2::new(1.0, 0.0)).length() < 1e-10);
        // Quarter point should be between the two, below the chord midline
        let q = arc.point_at(0.5);
        assert!(q.x > 0.0 && q.y > 0.0);
        assert!((q.length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_arc_tangent_follows_sweep_sign() {
        let ccw = Arc::new(DVec2::ZERO, 1.0, 0.0, PI);
        let cw = Arc::new(DVec2::ZERO, 1.0, 0.0, -PI);
        let t_ccw = ccw.tangent_at(0.0);
        let t_cw = cw.tangent_at(0.0);
        assert!(t_ccw.y > 0.0, "ccw tangent should point +y at angle 0");
        assert!(t_cw.y < 0.0, "cw tangent should point -y at angle 0");
    }

    #[test]
    fn test_arc_length() {
        let arc = Arc::new(DVec2::ZERO, 3.0, 1.0, -PI / 3.0);
        assert!((arc.length() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_arc_points_on_carrier_circle() {
        let arc = Arc::new(DVec2::new(1.0, -1.0), 2.5, 0.3, 1.7);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let d = (arc.point_at(t) - arc.center).length();
            assert!((d - 2.5).abs() < 1e-10, "off carrier at t={}: {}", t, d);
        }
    }
}
