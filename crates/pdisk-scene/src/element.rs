//! Scene elements: the drawable entities of a disk-model scene.
//!
//! Elements store construction parameters, not tessellated geometry. Every
//! sample rebuilds geometry from the parameters plus the timeline's current
//! modulation, so angle sweeps recompute the hyperbolic shapes exactly
//! rather than interpolating cached polylines.

use pdisk_core::{PdiskError, Result, Tolerance, Validate};
use pdisk_geometry::tessellate::curve_to_polyline;
use pdisk_geometry::{Circle, Geodesic, IdealTriangle};
use pdisk_math::{angle, Point2};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::frame::{Drawable, Shape};
use crate::style::{Color, Fill, Stroke};

new_key_type! {
    pub struct ElementId;
}

/// Timeline state applied to an element at one sample instant.
#[derive(Debug, Clone)]
pub struct Modulation {
    /// Fraction of stroke length revealed, `[0, 1]`.
    pub reveal: f64,
    /// Opacity multiplier, `[0, 1]`.
    pub opacity: f64,
    /// Offset added to all boundary angles, in radians.
    pub angle_offset: f64,
    /// Replacement text for labels.
    pub text_override: Option<String>,
}

impl Default for Modulation {
    fn default() -> Self {
        Self {
            reveal: 1.0,
            opacity: 1.0,
            angle_offset: 0.0,
            text_override: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub kind: ElementKind,
}

impl Element {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ElementKind {
    /// Boundary circle of the disk model.
    Disk { radius: f64, stroke: Stroke },
    /// `lines` diameters at angles `i * PI / lines`.
    DiameterGrid {
        radius: f64,
        lines: usize,
        stroke: Stroke,
    },
    /// Ideal triangle with vertices at the given boundary angles, scaled to
    /// a disk of the given radius.
    Triangle {
        angles: [f64; 3],
        radius: f64,
        stroke: Option<Stroke>,
        fill: Option<Fill>,
    },
    /// One geodesic between two boundary angles.
    GeodesicArc {
        from_angle: f64,
        to_angle: f64,
        radius: f64,
        stroke: Stroke,
    },
    /// Markers at boundary angles. `dot_radius` is in world units and does
    /// not scale with the disk.
    Dots {
        angles: Vec<f64>,
        radius: f64,
        dot_radius: f64,
        color: Color,
    },
    /// A text label anchored at a fixed position.
    Label {
        content: String,
        position: Point2,
        font_size: f64,
        color: Color,
    },
}

impl Element {
    /// Emit this element's drawables under the given modulation.
    ///
    /// `tess_tol` is the chord tolerance for tessellation, in world units.
    pub fn emit(&self, m: &Modulation, tess_tol: f64, out: &mut Vec<Drawable>) -> Result<()> {
        match &self.kind {
            ElementKind::Disk { radius, stroke } => {
                let circle = Circle::new(Point2::ZERO, *radius);
                let mut points = curve_to_polyline(&circle, tess_tol);
                points.pop();
                out.push(Drawable {
                    name: self.name.clone(),
                    shape: Shape::Polyline {
                        points,
                        closed: true,
                    },
                    stroke: Some(*stroke),
                    fill: None,
                    opacity: m.opacity,
                    reveal: m.reveal,
                });
            }
            ElementKind::DiameterGrid {
                radius,
                lines,
                stroke,
            } => {
                for i in 0..*lines {
                    let a = i as f64 * std::f64::consts::PI / *lines as f64;
                    let end = *radius * angle::unit_vector(a);
                    out.push(Drawable {
                        name: self.name.clone(),
                        shape: Shape::Polyline {
                            points: vec![end, -end],
                            closed: false,
                        },
                        stroke: Some(*stroke),
                        fill: None,
                        opacity: m.opacity,
                        reveal: m.reveal,
                    });
                }
            }
            ElementKind::Triangle {
                angles,
                radius,
                stroke,
                fill,
            } => {
                let rotated = [
                    angles[0] + m.angle_offset,
                    angles[1] + m.angle_offset,
                    angles[2] + m.angle_offset,
                ];
                let tri = IdealTriangle::new(rotated, Tolerance::default())?;
                let ring: Vec<Point2> = tri
                    .boundary_polyline(tess_tol / radius)
                    .into_iter()
                    .map(|p| p * *radius)
                    .collect();
                // Fill comes up with the reveal so a progressive draw does
                // not flash the full interior on its first frame
                let fill = fill.map(|f| Fill::new(f.color, f.opacity * m.reveal));
                out.push(Drawable {
                    name: self.name.clone(),
                    shape: Shape::Polyline {
                        points: ring,
                        closed: true,
                    },
                    stroke: *stroke,
                    fill,
                    opacity: m.opacity,
                    reveal: m.reveal,
                });
            }
            ElementKind::GeodesicArc {
                from_angle,
                to_angle,
                radius,
                stroke,
            } => {
                let geo = Geodesic::between(
                    from_angle + m.angle_offset,
                    to_angle + m.angle_offset,
                    Tolerance::default(),
                )?;
                let points: Vec<Point2> = curve_to_polyline(&geo, tess_tol / radius)
                    .into_iter()
                    .map(|p| p * *radius)
                    .collect();
                out.push(Drawable {
                    name: self.name.clone(),
                    shape: Shape::Polyline {
                        points,
                        closed: false,
                    },
                    stroke: Some(*stroke),
                    fill: None,
                    opacity: m.opacity,
                    reveal: m.reveal,
                });
            }
            ElementKind::Dots {
                angles,
                radius,
                dot_radius,
                color,
            } => {
                for a in angles {
                    let center = *radius * angle::unit_vector(a + m.angle_offset);
                    out.push(Drawable {
                        name: self.name.clone(),
                        shape: Shape::Dot {
                            center,
                            radius: *dot_radius,
                        },
                        stroke: None,
                        fill: Some(Fill::new(*color, 1.0)),
                        opacity: m.opacity,
                        reveal: 1.0,
                    });
                }
            }
            ElementKind::Label {
                content,
                position,
                font_size,
                color,
            } => {
                let text = m.text_override.clone().unwrap_or_else(|| content.clone());
                out.push(Drawable {
                    name: self.name.clone(),
                    shape: Shape::Text {
                        content: text,
                        position: *position,
                        font_size: *font_size,
                    },
                    stroke: None,
                    fill: Some(Fill::new(*color, 1.0)),
                    opacity: m.opacity,
                    reveal: 1.0,
                });
            }
        }
        Ok(())
    }
}

impl Validate for Element {
    fn validate(&self) -> Result<()> {
        let fail = |what: &str| PdiskError::Scene(format!("element '{}' has {}", self.name, what));

        match &self.kind {
            ElementKind::Disk { radius, stroke } => {
                if *radius <= 0.0 {
                    return Err(fail("a non-positive radius"));
                }
                if stroke.width <= 0.0 {
                    return Err(fail("a non-positive stroke width"));
                }
            }
            ElementKind::DiameterGrid {
                radius,
                lines,
                stroke,
            } => {
                if *radius <= 0.0 {
                    return Err(fail("a non-positive radius"));
                }
                if *lines == 0 {
                    return Err(fail("no grid lines"));
                }
                if stroke.width <= 0.0 {
                    return Err(fail("a non-positive stroke width"));
                }
            }
            ElementKind::Triangle {
                radius,
                stroke,
                fill,
                ..
            } => {
                if *radius <= 0.0 {
                    return Err(fail("a non-positive radius"));
                }
                if stroke.map_or(false, |s| s.width <= 0.0) {
                    return Err(fail("a non-positive stroke width"));
                }
                if fill.map_or(false, |f| !(0.0..=1.0).contains(&f.opacity)) {
                    return Err(fail("a fill opacity outside [0, 1]"));
                }
            }
            ElementKind::GeodesicArc { radius, stroke, .. } => {
                if *radius <= 0.0 {
                    return Err(fail("a non-positive radius"));
                }
                if stroke.width <= 0.0 {
                    return Err(fail("a non-positive stroke width"));
                }
            }
            ElementKind::Dots {
                angles,
                radius,
                dot_radius,
                ..
            } => {
                if *radius <= 0.0 {
                    return Err(fail("a non-positive radius"));
                }
                if *dot_radius <= 0.0 {
                    return Err(fail("a non-positive dot radius"));
                }
                if angles.is_empty() {
                    return Err(fail("no marker angles"));
                }
            }
            ElementKind::Label {
                content, font_size, ..
            } => {
                if content.is_empty() {
                    return Err(fail("empty text"));
                }
                if *font_size <= 0.0 {
                    return Err(fail("a non-positive font size"));
                }
            }
        }
        Ok(())
    }
}
