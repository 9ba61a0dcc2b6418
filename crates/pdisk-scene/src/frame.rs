//! Sampled frames: style-resolved drawables ready for a renderer.

use pdisk_math::{Aabb2, Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::style::{Fill, Stroke};

/// Resolved geometry of one drawable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Polyline { points: Vec<Point2>, closed: bool },
    Dot { center: Point2, radius: f64 },
    Text {
        content: String,
        position: Point2,
        font_size: f64,
    },
}

/// One drawable of a frame, in paint order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawable {
    pub name: String,
    pub shape: Shape,
    pub stroke: Option<Stroke>,
    pub fill: Option<Fill>,
    /// Opacity multiplier in `[0, 1]` applied to stroke and fill alike.
    pub opacity: f64,
    /// Fraction of the stroke length revealed, for progressive draws.
    /// Ignored for dots and text.
    pub reveal: f64,
}

/// A fully resolved snapshot of a scene at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub time: f64,
    pub drawables: Vec<Drawable>,
}

impl Frame {
    /// Bounding box over all drawable geometry. Text contributes only its
    /// anchor position.
    pub fn bounds(&self) -> Option<Aabb2> {
        let mut points = Vec::new();
        for d in &self.drawables {
            match &d.shape {
                Shape::Polyline { points: pts, .. } => points.extend_from_slice(pts),
                Shape::Dot { center, radius } => {
                    points.push(*center - Vector2::splat(*radius));
                    points.push(*center + Vector2::splat(*radius));
                }
                Shape::Text { position, .. } => points.push(*position),
            }
        }
        Aabb2::from_points(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use pdisk_math::DVec2;

    fn polyline(points: Vec<Point2>) -> Drawable {
        Drawable {
            name: "poly".into(),
            shape: Shape::Polyline {
                points,
                closed: false,
            },
            stroke: Some(Stroke::new(Color::WHITE, 2.0)),
            fill: None,
            opacity: 1.0,
            reveal: 1.0,
        }
    }

    #[test]
    fn test_empty_frame_has_no_bounds() {
        let frame = Frame {
            time: 0.0,
            drawables: vec![],
        };
        assert!(frame.bounds().is_none());
    }

    #[test]
    fn test_bounds_cover_dots_with_radius() {
        let frame = Frame {
            time: 0.0,
            drawables: vec![
                polyline(vec![DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0)]),
                Drawable {
                    name: "dot".into(),
                    shape: Shape::Dot {
                        center: DVec2::new(2.0, 0.0),
                        radius: 0.5,
                    },
                    stroke: None,
                    fill: Some(Fill::new(Color::YELLOW, 1.0)),
                    opacity: 1.0,
                    reveal: 1.0,
                },
            ],
        };
        let b = frame.bounds().unwrap();
        assert!((b.min.x - (-1.0)).abs() < 1e-12);
        assert!((b.max.x - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_frame_serializes_for_the_player() {
        let frame = Frame {
            time: 1.5,
            drawables: vec![polyline(vec![DVec2::ZERO, DVec2::X])],
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"kind\":\"polyline\""));
        assert!(json.contains("\"time\":1.5"));
    }
}
