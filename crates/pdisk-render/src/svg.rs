//! Hand-written SVG output for single frames.
//!
//! Partial strokes use the dash trick: a dash pattern of one full path
//! length with an offset hiding the unrevealed tail. Browsers and
//! rasterizers (resvg) both honor it.

use std::fmt::Write;
use std::path::Path;

use pdisk_core::Result;
use pdisk_geometry::tessellate::polyline_length;
use pdisk_math::Point2;
use pdisk_scene::{Color, Drawable, Frame, Shape};

use crate::viewport::Viewport;

/// Render one frame as a standalone SVG document.
pub fn frame_to_svg(frame: &Frame, viewport: &Viewport, background: Color) -> String {
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        viewport.width, viewport.height, viewport.width, viewport.height
    )
    .unwrap();
    writeln!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        background.to_hex()
    )
    .unwrap();

    for d in &frame.drawables {
        match &d.shape {
            Shape::Polyline { points, closed } => {
                write_polyline(&mut svg, d, points, *closed, viewport)
            }
            Shape::Dot { center, radius } => write_dot(&mut svg, d, *center, *radius, viewport),
            Shape::Text {
                content,
                position,
                font_size,
            } => write_text(&mut svg, d, content, *position, *font_size, viewport),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render one frame and write it to `path`.
pub fn export_svg(frame: &Frame, viewport: &Viewport, background: Color, path: &Path) -> Result<()> {
    std::fs::write(path, frame_to_svg(frame, viewport, background))?;
    Ok(())
}

fn write_polyline(svg: &mut String, d: &Drawable, points: &[Point2], closed: bool, vp: &Viewport) {
    if points.len() < 2 {
        return;
    }
    let px: Vec<Point2> = points.iter().map(|&p| vp.to_screen(p)).collect();

    let mut path = String::new();
    write!(path, "M {:.2},{:.2}", px[0].x, px[0].y).unwrap();
    for p in &px[1..] {
        write!(path, " L {:.2},{:.2}", p.x, p.y).unwrap();
    }
    if closed {
        path.push_str(" Z");
    }

    write!(svg, r#"<path d="{}""#, path).unwrap();
    match &d.fill {
        Some(fill) => write!(
            svg,
            r#" fill="{}" fill-opacity="{:.3}""#,
            fill.color.to_hex(),
            fill.opacity * d.opacity
        )
        .unwrap(),
        None => svg.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = &d.stroke {
        write!(
            svg,
            r#" stroke="{}" stroke-width="{:.2}" stroke-opacity="{:.3}" stroke-linecap="round" stroke-linejoin="round""#,
            stroke.color.to_hex(),
            vp.stroke_px(stroke.width),
            d.opacity
        )
        .unwrap();
        if d.reveal < 1.0 {
            let mut len = polyline_length(&px);
            if closed {
                len += (px[px.len() - 1] - px[0]).length();
            }
            write!(
                svg,
                r#" stroke-dasharray="{:.2}" stroke-dashoffset="{:.2}""#,
                len,
                (1.0 - d.reveal) * len
            )
            .unwrap();
        }
    }
    svg.push_str("/>\n");
}

fn write_dot(svg: &mut String, d: &Drawable, center: Point2, radius: f64, vp: &Viewport) {
    let c = vp.to_screen(center);
    write!(
        svg,
        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}""#,
        c.x,
        c.y,
        radius * vp.scale()
    )
    .unwrap();
    if let Some(fill) = &d.fill {
        write!(
            svg,
            r#" fill="{}" fill-opacity="{:.3}""#,
            fill.color.to_hex(),
            fill.opacity * d.opacity
        )
        .unwrap();
    }
    if let Some(stroke) = &d.stroke {
        write!(
            svg,
            r#" stroke="{}" stroke-width="{:.2}" stroke-opacity="{:.3}""#,
            stroke.color.to_hex(),
            vp.stroke_px(stroke.width),
            d.opacity
        )
        .unwrap();
    }
    svg.push_str("/>\n");
}

fn write_text(
    svg: &mut String,
    d: &Drawable,
    content: &str,
    position: Point2,
    font_size: f64,
    vp: &Viewport,
) {
    let p = vp.to_screen(position);
    let (color, alpha) = match &d.fill {
        Some(fill) => (fill.color, fill.opacity * d.opacity),
        None => (Color::WHITE, d.opacity),
    };
    writeln!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" font-size="{:.1}" font-family="sans-serif" fill="{}" fill-opacity="{:.3}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
        p.x,
        p.y,
        vp.font_px(font_size),
        color.to_hex(),
        alpha,
        escape_xml(content)
    )
    .unwrap();
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdisk_math::DVec2;
    use pdisk_scene::{Fill, Stroke};

    fn square(reveal: f64) -> Drawable {
        Drawable {
            name: "square".into(),
            shape: Shape::Polyline {
                points: vec![
                    DVec2::new(0.0, 0.0),
                    DVec2::new(1.0, 0.0),
                    DVec2::new(1.0, 1.0),
                    DVec2::new(0.0, 1.0),
                ],
                closed: true,
            },
            stroke: Some(Stroke::new(Color::BLUE, 2.0)),
            fill: Some(Fill::new(Color::BLUE, 0.5)),
            opacity: 1.0,
            reveal,
        }
    }

    fn one_drawable_frame(d: Drawable) -> Frame {
        Frame {
            time: 0.0,
            drawables: vec![d],
        }
    }

    #[test]
    fn test_document_shell() {
        let svg = frame_to_svg(&one_drawable_frame(square(1.0)), &Viewport::standard(), Color::BLACK);
        assert!(svg.starts_with("<svg xmlns"));
        assert!(svg.contains(r#"width="1280" height="720""#));
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#000000"/>"##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_full_reveal_has_no_dash() {
        let svg = frame_to_svg(&one_drawable_frame(square(1.0)), &Viewport::standard(), Color::BLACK);
        assert!(svg.contains(" Z\""));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_partial_reveal_dash_covers_closing_segment() {
        let svg = frame_to_svg(&one_drawable_frame(square(0.5)), &Viewport::standard(), Color::BLACK);
        // Unit square at 90 px per unit: 360 px of perimeter, half hidden.
        assert!(svg.contains(r#"stroke-dasharray="360.00""#), "{}", svg);
        assert!(svg.contains(r#"stroke-dashoffset="180.00""#), "{}", svg);
    }

    #[test]
    fn test_unfilled_polyline_gets_fill_none() {
        let d = Drawable {
            fill: None,
            ..square(1.0)
        };
        let svg = frame_to_svg(&one_drawable_frame(d), &Viewport::standard(), Color::BLACK);
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#58C4DD""##));
    }

    #[test]
    fn test_fill_opacity_multiplies_element_opacity() {
        let d = Drawable {
            opacity: 0.5,
            ..square(1.0)
        };
        let svg = frame_to_svg(&one_drawable_frame(d), &Viewport::standard(), Color::BLACK);
        assert!(svg.contains(r#"fill-opacity="0.250""#));
        assert!(svg.contains(r#"stroke-opacity="0.500""#));
    }

    #[test]
    fn test_dot_radius_in_pixels() {
        let d = Drawable {
            name: "dot".into(),
            shape: Shape::Dot {
                center: DVec2::ZERO,
                radius: 0.5,
            },
            stroke: None,
            fill: Some(Fill::new(Color::YELLOW, 1.0)),
            opacity: 1.0,
            reveal: 1.0,
        };
        let svg = frame_to_svg(&one_drawable_frame(d), &Viewport::standard(), Color::BLACK);
        assert!(svg.contains(r#"<circle cx="640.00" cy="360.00" r="45.00""#));
        assert!(svg.contains(r##"fill="#FFFF00""##));
    }

    #[test]
    fn test_text_is_escaped_and_centered() {
        let d = Drawable {
            name: "label".into(),
            shape: Shape::Text {
                content: "a < b & \"c\"".into(),
                position: DVec2::new(0.0, 3.2),
                font_size: 36.0,
            },
            stroke: None,
            fill: Some(Fill::new(Color::WHITE, 1.0)),
            opacity: 1.0,
            reveal: 1.0,
        };
        let svg = frame_to_svg(&one_drawable_frame(d), &Viewport::standard(), Color::BLACK);
        assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"font-size="36.0""#));
    }

    #[test]
    fn test_export_svg_writes_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let frame = one_drawable_frame(square(1.0));

        export_svg(&frame, &Viewport::standard(), Color::BLACK, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("</svg>"));
    }
}
