//! Adaptive flattening of curves into render-ready polylines.
//!
//! The chord tolerance here is a display quantity: callers pick it per
//! output resolution, independently of the tolerances used to construct
//! the curves themselves.

use pdisk_math::Point2;

use crate::curve::Curve;

/// Recursion limit for adaptive bisection.
const MAX_DEPTH: u32 = 12;

/// Flatten a curve into a polyline by recursive bisection.
///
/// Each candidate chord is tested at its parametric midpoint; if the curve
/// strays from the chord by more than `tolerance` the interval is split and
/// both halves are refined. A straight curve comes back as a single chord.
///
/// # Arguments
/// * `curve` - The curve to flatten
/// * `tolerance` - Maximum chord deviation, in world units
///
/// # Returns
/// Points along the curve, from the start of its domain to the end.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point2> {
    let (t_min, t_max) = curve.domain();
    let mut points = vec![curve.point_at(t_min)];
    refine(curve, t_min, t_max, tolerance, &mut points, 0);
    points
}

fn refine(curve: &dyn Curve, t0: f64, t1: f64, tolerance: f64, out: &mut Vec<Point2>, depth: u32) {
    let t_mid = 0.5 * (t0 + t1);
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let sagitta = (curve.point_at(t_mid) - 0.5 * (p0 + p1)).length();

    if sagitta > tolerance && depth < MAX_DEPTH {
        refine(curve, t0, t_mid, tolerance, out, depth + 1);
        refine(curve, t_mid, t1, tolerance, out, depth + 1);
    } else {
        out.push(p1);
    }
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Circle, Segment};
    use crate::geodesic::Geodesic;
    use approx::assert_relative_eq;
    use pdisk_core::Tolerance;
    use pdisk_math::DVec2;
    use std::f64::consts::PI;

    #[test]
    fn test_curve_to_polyline_segment() {
        let seg = Segment::new(DVec2::ZERO, DVec2::new(10.0, 0.0));
        let points = curve_to_polyline(&seg, 0.01);
        // A straight segment should produce exactly 2 points
        assert_eq!(points.len(), 2);
        assert!((points[0] - DVec2::ZERO).length() < 1e-10);
        assert!((points[1] - DVec2::new(10.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_curve_to_polyline_circle() {
        let circle = Circle::unit();
        let points = curve_to_polyline(&circle, 0.01);
        assert!(points.len() > 10, "too few points: {}", points.len());

        // Every sample sits on the circle itself
        for p in &points {
            let r = p.length();
            assert!((r - 1.0).abs() < 0.02, "point off circle: r={}", r);
        }
    }

    #[test]
    fn test_curve_to_polyline_closes_circle() {
        let circle = Circle::unit();
        let points = curve_to_polyline(&circle, 0.01);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first - last).length() < 1e-10);
    }

    #[test]
    fn test_geodesic_polyline_stays_in_disk() {
        let g = Geodesic::between(0.3, 2.6, Tolerance::default()).unwrap();
        let points = curve_to_polyline(&g, 1e-4);
        for p in &points {
            assert!(p.length() <= 1.0 + 1e-9, "point outside disk: |p|={}", p.length());
        }
    }

    #[test]
    fn test_polyline_length_circle() {
        let circle = Circle::unit();
        let points = curve_to_polyline(&circle, 1e-5);
        let len = polyline_length(&points);
        assert_relative_eq!(len, 2.0 * PI, epsilon = 1e-3);
    }
}
