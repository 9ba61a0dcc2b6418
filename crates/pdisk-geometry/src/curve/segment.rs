//! Straight segment curve.

use pdisk_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A straight segment from `start` to `end`, parameterized over `[0, 1]`.
///
/// In the disk model these appear as chords: diameters are the geodesics
/// through the origin, and the grid overlay is built from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    pub fn midpoint(&self) -> Point2 {
        (self.start + self.end) * 0.5
    }
}

impl Curve for Segment {
    fn point_at(&self, t: f64) -> Point2 {
        self.start + t * (self.end - self.start)
    }

    fn tangent_at(&self, _t: f64) -> Vector2 {
        self.end - self.start
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdisk_math::DVec2;

    #[test]
    fn test_segment_point_at() {
        let seg = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(2.0, 4.0));
        let p = seg.point_at(0.5);
        assert!((p.x - 1.0).abs() < 1e-10);
        assert!((p.y - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment_endpoints() {
        let seg = Segment::new(DVec2::new(1.0, 2.0), DVec2::new(4.0, 5.0));
        let p0 = seg.point_at(0.0);
        let p1 = seg.point_at(1.0);
        assert!((p0 - seg.start).length() < 1e-10);
        assert!((p1 - seg.end).length() < 1e-10);
    }

    #[test]
    fn test_segment_tangent() {
        let seg = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0));
        let t = seg.tangent_at(0.5);
        assert!((t.x - 1.0).abs() < 1e-10);
        assert!(t.y.abs() < 1e-10);
    }

    #[test]
    fn test_segment_length_midpoint() {
        let seg = Segment::new(DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0));
        assert!((seg.length() - 2.0).abs() < 1e-12);
        assert!(seg.midpoint().length() < 1e-12);
    }

    #[test]
    fn test_segment_domain() {
        let seg = Segment::new(DVec2::ZERO, DVec2::X);
        assert_eq!(seg.domain(), (0.0, 1.0));
    }
}
