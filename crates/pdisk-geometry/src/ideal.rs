//! Ideal triangles: hyperbolic triangles with all three vertices on the
//! boundary circle.
//!
//! Every vertex of an ideal triangle is an ideal point, so every interior
//! angle is zero and the Gauss-Bonnet formula gives the same hyperbolic
//! area, `pi`, for all of them. The disk model is conformal, which means
//! the angles measured between Euclidean tangents are already the
//! hyperbolic angles.

use pdisk_core::{PdiskError, Result, Tolerance, Validate};
use pdisk_math::{angle, Point2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::curve::Curve;
use crate::geodesic::Geodesic;
use crate::tessellate::curve_to_polyline;

/// An ideal triangle given by three boundary angles.
///
/// Sides are geodesics in vertex order: `0 -> 1`, `1 -> 2`, `2 -> 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealTriangle {
    angles: [f64; 3],
    sides: [Geodesic; 3],
}

impl IdealTriangle {
    /// Build the triangle with ideal vertices at the given boundary angles.
    ///
    /// Fails if any two angles coincide within `tol.angular`.
    pub fn new(angles: [f64; 3], tol: Tolerance) -> Result<Self> {
        let sides = [
            Geodesic::between(angles[0], angles[1], tol)?,
            Geodesic::between(angles[1], angles[2], tol)?,
            Geodesic::between(angles[2], angles[0], tol)?,
        ];
        Ok(Self { angles, sides })
    }

    /// The three boundary angles, in construction order.
    pub fn angles(&self) -> [f64; 3] {
        self.angles
    }

    /// The three ideal vertices as points on the unit circle.
    pub fn vertices(&self) -> [Point2; 3] {
        [
            angle::unit_vector(self.angles[0]),
            angle::unit_vector(self.angles[1]),
            angle::unit_vector(self.angles[2]),
        ]
    }

    pub fn sides(&self) -> &[Geodesic; 3] {
        &self.sides
    }

    /// Interior angle at vertex `i`, measured between the tangents of the
    /// two sides leaving that vertex.
    ///
    /// Both sides meet the boundary at right angles, so their tangents at
    /// the shared vertex are parallel and the result is zero up to floating
    /// point noise.
    pub fn interior_angle_at(&self, i: usize) -> f64 {
        let outgoing = self.sides[i % 3].tangent_at(0.0).normalize();
        let incoming = (-self.sides[(i + 2) % 3].tangent_at(1.0)).normalize();
        outgoing.dot(incoming).clamp(-1.0, 1.0).acos()
    }

    /// All three interior angles, in vertex order.
    pub fn interior_angles(&self) -> [f64; 3] {
        [
            self.interior_angle_at(0),
            self.interior_angle_at(1),
            self.interior_angle_at(2),
        ]
    }

    /// Hyperbolic area by Gauss-Bonnet: `pi` minus the interior angle sum.
    pub fn hyperbolic_area(&self) -> f64 {
        let angle_sum: f64 = self.interior_angles().iter().sum();
        PI - angle_sum
    }

    /// Tessellate the three sides into a single closed ring of points.
    ///
    /// `tolerance` is the maximum chord deviation, as in
    /// [`curve_to_polyline`]. Junction points are emitted once and the final
    /// point of the last side is dropped: the ring closes back to the first
    /// point implicitly.
    pub fn boundary_polyline(&self, tolerance: f64) -> Vec<Point2> {
        let mut ring = Vec::new();
        for (i, side) in self.sides.iter().enumerate() {
            let mut pts = curve_to_polyline(side, tolerance);
            if i > 0 {
                pts.remove(0);
            }
            ring.append(&mut pts);
        }
        ring.pop();
        ring
    }
}

impl Validate for IdealTriangle {
    fn validate(&self) -> Result<()> {
        let tol = Tolerance::default();

        // 1. Sides form a closed chain through the ideal vertices
        for i in 0..3 {
            let end = self.sides[i].point_at(1.0);
            let next_start = self.sides[(i + 1) % 3].point_at(0.0);
            let gap = (end - next_start).length();
            if gap > tol.linear {
                return Err(PdiskError::Geometry(format!(
                    "side {} ends {:.3e} away from the start of side {}",
                    i,
                    gap,
                    (i + 1) % 3
                )));
            }
        }

        // 2. Every side meets the boundary circle at a right angle
        for (i, side) in self.sides.iter().enumerate() {
            let residual = side.orthogonality_residual().abs();
            if residual > tol.linear {
                return Err(PdiskError::Geometry(format!(
                    "side {} violates orthogonality: residual {:.3e}",
                    i, residual
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equilateral() -> IdealTriangle {
        IdealTriangle::new(
            [PI / 2.0, PI / 2.0 + 2.0 * PI / 3.0, PI / 2.0 + 4.0 * PI / 3.0],
            Tolerance::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_vertices_on_boundary() {
        let tri = equilateral();
        for v in tri.vertices() {
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_interior_angles_vanish() {
        let tri = IdealTriangle::new([0.2, 1.9, 4.0], Tolerance::default()).unwrap();
        for (i, a) in tri.interior_angles().iter().enumerate() {
            assert!(a.abs() < 1e-7, "interior angle at vertex {}: {}", i, a);
        }
    }

    #[test]
    fn test_area_is_pi() {
        let tri = equilateral();
        assert!(
            (tri.hyperbolic_area() - PI).abs() < 1e-6,
            "area {}",
            tri.hyperbolic_area()
        );
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let err = IdealTriangle::new([0.0, 0.0, 1.0], Tolerance::default()).unwrap_err();
        assert!(matches!(err, PdiskError::Degenerate(_)));
    }

    #[test]
    fn test_validate_passes() {
        let tri = IdealTriangle::new([0.1, 2.0, 4.5], Tolerance::default()).unwrap();
        assert!(tri.validate().is_ok());
    }

    #[test]
    fn test_boundary_polyline_closed_ring() {
        let tri = equilateral();
        let ring = tri.boundary_polyline(1e-4);
        assert!(ring.len() > 10, "ring too coarse: {} points", ring.len());
        // No interior duplicates at the junctions
        for w in ring.windows(2) {
            assert!((w[1] - w[0]).length() > 1e-12, "duplicate ring point");
        }
        // Every point inside the closed unit disk
        for p in &ring {
            assert!(p.length() <= 1.0 + 1e-9);
        }
    }
}
