//! The built-in scene catalog.
//!
//! Four classroom scenes over the disk model, each a builder from its
//! config. Timelines are sequential: each `play` starts when the previous
//! one ends, as in the reference footage.

use std::f64::consts::PI;

use pdisk_core::{PdiskError, Result, Validate};
use pdisk_math::Point2;

use crate::config::{
    ConstructionConfig, DiskConfig, IdealTriangleConfig, RotatingConfig, SceneSpec,
    TessellationConfig,
};
use crate::element::{Element, ElementId, ElementKind};
use crate::scene::Scene;
use crate::style::{Color, Fill, Stroke};
use crate::timeline::{Action, Cue, Easing};

const TITLE_POS: Point2 = Point2::new(0.0, 3.2);
const CAPTION_POS: Point2 = Point2::new(0.0, -3.3);
const TITLE_SIZE: f64 = 36.0;
const CAPTION_SIZE: f64 = 24.0;

fn title_element(text: &str) -> Element {
    Element::new(
        "title",
        ElementKind::Label {
            content: text.into(),
            position: TITLE_POS,
            font_size: TITLE_SIZE,
            color: Color::WHITE,
        },
    )
}

fn caption_element(text: &str) -> Element {
    Element::new(
        "caption",
        ElementKind::Label {
            content: text.into(),
            position: CAPTION_POS,
            font_size: CAPTION_SIZE,
            color: Color::WHITE,
        },
    )
}

/// Add the disk boundary (and grid, when enabled) and return the boundary
/// id. The grid is static scenery; only the boundary gets animated.
fn add_disk(scene: &mut Scene, cfg: &DiskConfig) -> ElementId {
    if cfg.show_grid {
        scene.add(Element::new(
            "grid",
            ElementKind::DiameterGrid {
                radius: cfg.radius,
                lines: cfg.grid_lines,
                stroke: Stroke::new(Color::GREY, 0.5),
            },
        ));
    }
    scene.add(Element::new(
        "boundary",
        ElementKind::Disk {
            radius: cfg.radius,
            stroke: Stroke::new(Color::WHITE, 2.0),
        },
    ))
}

fn equilateral_angles(base: f64) -> [f64; 3] {
    [base, base + 2.0 * PI / 3.0, base + 4.0 * PI / 3.0]
}

/// Title, boundary, one equilateral ideal triangle drawn in, vertex dots.
pub fn ideal_triangle(cfg: &IdealTriangleConfig) -> Scene {
    let mut scene = Scene::new("ideal-triangle");

    let title = scene.add(title_element("Ideal Triangle on the Poincaré Disk"));
    let boundary = add_disk(&mut scene, &cfg.disk);
    let triangle = scene.add(Element::new(
        "triangle",
        ElementKind::Triangle {
            angles: cfg.angles,
            radius: cfg.disk.radius,
            stroke: Some(Stroke::new(cfg.color, cfg.stroke_width)),
            fill: Some(Fill::new(cfg.color, cfg.fill_opacity)),
        },
    ));
    let dots = scene.add(Element::new(
        "vertices",
        ElementKind::Dots {
            angles: cfg.angles.to_vec(),
            radius: cfg.disk.radius,
            dot_radius: cfg.dot_radius,
            color: Color::YELLOW,
        },
    ));

    scene.play(Cue::new().act(title, Action::Write));
    scene.play(Cue::new().act(boundary, Action::Draw));
    scene.play(
        Cue::new()
            .act(triangle, Action::Draw)
            .run_time(cfg.draw_seconds),
    );
    scene.play(Cue::new().act(dots, Action::FadeIn));
    scene.wait(cfg.hold_seconds);

    scene
}

/// Central triangle plus its three neighbors, drawn with a stagger.
///
/// Neighbor `k` shares a side with the central triangle and closes at the
/// boundary midpoint of that side's two vertices.
pub fn tessellation(cfg: &TessellationConfig) -> Scene {
    let mut scene = Scene::new("tessellation");

    let title = scene.add(title_element("Ideal Triangle Tessellation"));
    let boundary = add_disk(&mut scene, &cfg.disk);

    let base = cfg.base_angle;
    let step = 2.0 * PI / 3.0;
    let mut triangle_ids = Vec::new();

    let central = scene.add(Element::new(
        "central",
        ElementKind::Triangle {
            angles: equilateral_angles(base),
            radius: cfg.disk.radius,
            stroke: Some(Stroke::new(cfg.central_color, cfg.stroke_width)),
            fill: Some(Fill::new(cfg.central_color, cfg.fill_opacity)),
        },
    ));
    triangle_ids.push(central);

    for (k, color) in cfg.adjacent_colors.iter().enumerate() {
        let k = k as f64;
        let angles = [base + k * step, base + (k + 1.0) * step, base + (k + 0.5) * step];
        let id = scene.add(Element::new(
            format!("adjacent-{}", k as usize),
            ElementKind::Triangle {
                angles,
                radius: cfg.disk.radius,
                stroke: Some(Stroke::new(*color, cfg.stroke_width)),
                fill: Some(Fill::new(*color, cfg.fill_opacity)),
            },
        ));
        triangle_ids.push(id);
    }

    scene.play(
        Cue::new()
            .act(title, Action::Write)
            .act(boundary, Action::Draw),
    );

    let mut draw_all = Cue::new().lag_ratio(cfg.lag_ratio);
    for id in triangle_ids {
        draw_all = draw_all.act(id, Action::Draw);
    }
    scene.play(draw_all);
    scene.wait(cfg.hold_seconds);

    scene
}

/// Equilateral triangle and vertex dots sweeping a full turn around the
/// boundary at constant rate.
pub fn rotating(cfg: &RotatingConfig) -> Scene {
    let mut scene = Scene::new("rotating");

    let title = scene.add(title_element("Ideal Triangle with Moving Vertices"));
    let boundary = add_disk(&mut scene, &cfg.disk);

    scene.play(
        Cue::new()
            .act(title, Action::Write)
            .act(boundary, Action::Draw),
    );

    // Added mid-timeline: both pop in fully formed once the intro is done
    let base = equilateral_angles(0.0);
    let triangle = scene.add(Element::new(
        "triangle",
        ElementKind::Triangle {
            angles: base,
            radius: cfg.disk.radius,
            stroke: Some(Stroke::new(cfg.color, cfg.stroke_width)),
            fill: Some(Fill::new(cfg.color, cfg.fill_opacity)),
        },
    ));
    let dots = scene.add(Element::new(
        "vertices",
        ElementKind::Dots {
            angles: base.to_vec(),
            radius: cfg.disk.radius,
            dot_radius: cfg.dot_radius,
            color: Color::YELLOW,
        },
    ));

    let sweep = cfg.turns * 2.0 * PI;
    scene.play(
        Cue::new()
            .act(triangle, Action::Rotate { from: 0.0, to: sweep })
            .act(dots, Action::Rotate { from: 0.0, to: sweep })
            .run_time(cfg.spin_seconds)
            .ease(Easing::Linear),
    );
    scene.wait(cfg.hold_seconds);

    scene
}

/// Step-by-step construction with captions: ideal points, geodesic sides
/// one at a time, then the filled triangle.
pub fn construction(cfg: &ConstructionConfig) -> Scene {
    let mut scene = Scene::new("construction");

    let title = scene.add(title_element("Constructing an Ideal Triangle"));
    let boundary = add_disk(&mut scene, &cfg.disk);
    let dots = scene.add(Element::new(
        "ideal-points",
        ElementKind::Dots {
            angles: cfg.angles.to_vec(),
            radius: cfg.disk.radius,
            dot_radius: cfg.dot_radius,
            color: Color::YELLOW,
        },
    ));

    let mut sides = Vec::new();
    for i in 0..3 {
        let id = scene.add(Element::new(
            format!("side-{}", i),
            ElementKind::GeodesicArc {
                from_angle: cfg.angles[i],
                to_angle: cfg.angles[(i + 1) % 3],
                radius: cfg.disk.radius,
                stroke: Stroke::new(cfg.side_colors[i], cfg.stroke_width),
            },
        ));
        sides.push(id);
    }

    let caption = scene.add(caption_element("Step 1: Choose three ideal points"));
    let triangle = scene.add(Element::new(
        "triangle",
        ElementKind::Triangle {
            angles: cfg.angles,
            radius: cfg.disk.radius,
            stroke: None,
            fill: Some(Fill::new(cfg.fill_color, cfg.fill_opacity)),
        },
    ));

    scene.play(
        Cue::new()
            .act(title, Action::Write)
            .act(boundary, Action::Draw),
    );
    scene.play(
        Cue::new()
            .act(caption, Action::Write)
            .act(dots, Action::FadeIn),
    );
    scene.wait(1.0);
    scene.play(Cue::new().act(
        caption,
        Action::SwapText {
            to: "Step 2: Connect with hyperbolic geodesics".into(),
        },
    ));
    for side in sides {
        scene.play(Cue::new().act(side, Action::Draw));
    }
    scene.wait(1.0);
    scene.play(Cue::new().act(
        caption,
        Action::SwapText {
            to: "Result: An ideal triangle".into(),
        },
    ));
    scene.play(Cue::new().act(triangle, Action::FadeIn));
    scene.wait(cfg.hold_seconds);

    scene
}

/// Build and validate the scene a spec selects.
///
/// Configs can carry impossible geometry (coincident triangle angles, zero
/// radii); validation catches that here rather than at sampling time.
pub fn build(spec: &SceneSpec) -> Result<Scene> {
    let scene = match spec {
        SceneSpec::IdealTriangle(cfg) => ideal_triangle(cfg),
        SceneSpec::Tessellation(cfg) => tessellation(cfg),
        SceneSpec::Rotating(cfg) => rotating(cfg),
        SceneSpec::Construction(cfg) => construction(cfg),
    };
    scene.validate()?;
    Ok(scene)
}

/// Catalog scene names, in presentation order.
pub fn names() -> &'static [&'static str] {
    &["ideal-triangle", "tessellation", "rotating", "construction"]
}

/// Build a catalog scene by name with default configuration.
pub fn by_name(name: &str) -> Result<Scene> {
    let spec = match name {
        "ideal-triangle" => SceneSpec::IdealTriangle(IdealTriangleConfig::default()),
        "tessellation" => SceneSpec::Tessellation(TessellationConfig::default()),
        "rotating" => SceneSpec::Rotating(RotatingConfig::default()),
        "construction" => SceneSpec::Construction(ConstructionConfig::default()),
        other => {
            return Err(PdiskError::Config(format!(
                "unknown scene '{}'; available: {}",
                other,
                names().join(", ")
            )))
        }
    };
    build(&spec)
}
