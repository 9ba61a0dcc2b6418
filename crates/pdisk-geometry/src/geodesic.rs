//! Hyperbolic geodesics of the Poincare disk model.
//!
//! A geodesic between two boundary points is either a diameter (when the
//! points are antipodal) or an arc of the unique circle through both points
//! that meets the unit circle at right angles.
//!
//! The orthogonal circle has a closed form. For boundary points `P1`, `P2`
//! on the unit circle, orthogonality forces `C . Pi = 1` for the center `C`,
//! which gives
//!
//! ```text
//! C = (P1 + P2) / (1 + P1 . P2),    r = |C - P1|
//! ```
//!
//! The arc kept inside the disk subtends the angle `pi - sep` at `C`, where
//! `sep` is the boundary separation of the two points. It is always the
//! shorter of the two arcs, so the wrapped signed angle from `P1 - C` to
//! `P2 - C` selects it directly. No midpoint probing is needed.

use pdisk_core::{PdiskError, Result, Tolerance};
use pdisk_math::{angle, Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::curve::{Arc, Curve, Segment};

/// A geodesic of the disk model joining two ideal (boundary) points.
///
/// Parameterized over `[0, 1]` from the first boundary point to the second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Geodesic {
    /// Antipodal boundary points: the geodesic is a straight diameter.
    Diameter(Segment),
    /// Generic case: arc of the circle orthogonal to the unit circle.
    Arc(Arc),
}

impl Geodesic {
    /// Construct the geodesic joining the boundary points at angles
    /// `theta1` and `theta2`.
    ///
    /// Coincident angles (separation below `tol.angular`) are rejected:
    /// there is no geodesic through a single ideal point. Angles within
    /// `tol.angular` of antipodal fall back to a diameter, where the
    /// orthogonal-circle radius would diverge.
    pub fn between(theta1: f64, theta2: f64, tol: Tolerance) -> Result<Self> {
        let p1 = angle::unit_vector(theta1);
        let p2 = angle::unit_vector(theta2);
        let sep = angle::separation(theta1, theta2);

        if sep < tol.angular {
            return Err(PdiskError::Degenerate(format!(
                "boundary angles {} and {} coincide (separation {:.3e})",
                theta1, theta2, sep
            )));
        }

        if (sep - PI).abs() < tol.angular {
            return Ok(Geodesic::Diameter(Segment::new(p1, p2)));
        }

        // sep < pi - tol.angular, so the denominator stays away from zero
        let center = (p1 + p2) / (1.0 + p1.dot(p2));
        let radius = (center - p1).length();

        let d1 = p1 - center;
        let d2 = p2 - center;
        let start_angle = d1.y.atan2(d1.x);
        let sweep = angle::wrap_to_pi(d2.y.atan2(d2.x) - start_angle);

        Ok(Geodesic::Arc(Arc::new(center, radius, start_angle, sweep)))
    }

    pub fn is_diameter(&self) -> bool {
        matches!(self, Geodesic::Diameter(_))
    }

    /// Start and end boundary points, in construction order.
    pub fn endpoints(&self) -> (Point2, Point2) {
        (self.point_at(0.0), self.point_at(1.0))
    }

    /// Signed defect of the orthogonality condition `|C|^2 - r^2 = 1`.
    ///
    /// Zero by definition for a diameter.
    pub fn orthogonality_residual(&self) -> f64 {
        match self {
            Geodesic::Diameter(_) => 0.0,
            Geodesic::Arc(arc) => {
                arc.center.length_squared() - arc.radius * arc.radius - 1.0
            }
        }
    }
}

impl Curve for Geodesic {
    fn point_at(&self, t: f64) -> Point2 {
        match self {
            Geodesic::Diameter(seg) => seg.point_at(t),
            Geodesic::Arc(arc) => arc.point_at(t),
        }
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        match self {
            Geodesic::Diameter(seg) => seg.tangent_at(t),
            Geodesic::Arc(arc) => arc.tangent_at(t),
        }
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
