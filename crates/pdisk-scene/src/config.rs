//! Declarative scene configuration.
//!
//! Every knob defaults to the values the reference videos were produced
//! with, so an empty config reproduces them exactly. Configs deserialize
//! from JSON with a `scene` tag selecting the catalog entry.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::style::{palette_color, Color};

/// The disk model itself: boundary circle plus optional diameter overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    pub radius: f64,
    pub show_grid: bool,
    pub grid_lines: usize,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            radius: 2.5,
            show_grid: false,
            grid_lines: 8,
        }
    }
}

/// One equilateral ideal triangle, drawn and held.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealTriangleConfig {
    pub disk: DiskConfig,
    pub angles: [f64; 3],
    pub color: Color,
    pub stroke_width: f64,
    pub fill_opacity: f64,
    pub dot_radius: f64,
    pub draw_seconds: f64,
    pub hold_seconds: f64,
}

impl Default for IdealTriangleConfig {
    fn default() -> Self {
        Self {
            disk: DiskConfig::default(),
            angles: [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0],
            color: Color::BLUE,
            stroke_width: 3.0,
            fill_opacity: 0.5,
            dot_radius: 0.08,
            draw_seconds: 2.0,
            hold_seconds: 2.0,
        }
    }
}

/// A central triangle and the three neighbors sharing its sides, drawn
/// with a stagger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    pub disk: DiskConfig,
    pub base_angle: f64,
    pub central_color: Color,
    pub adjacent_colors: [Color; 3],
    pub stroke_width: f64,
    pub fill_opacity: f64,
    pub lag_ratio: f64,
    pub hold_seconds: f64,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            disk: DiskConfig::default(),
            base_angle: PI / 6.0,
            central_color: palette_color(0),
            adjacent_colors: [palette_color(1), palette_color(2), palette_color(3)],
            stroke_width: 2.0,
            fill_opacity: 0.5,
            lag_ratio: 0.2,
            hold_seconds: 3.0,
        }
    }
}

/// An equilateral triangle whose vertices sweep the boundary. The shape is
/// recomputed every frame, so the sides stay true geodesics throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatingConfig {
    pub disk: DiskConfig,
    pub turns: f64,
    pub spin_seconds: f64,
    pub color: Color,
    pub stroke_width: f64,
    pub fill_opacity: f64,
    pub dot_radius: f64,
    pub hold_seconds: f64,
}

impl Default for RotatingConfig {
    fn default() -> Self {
        Self {
            disk: DiskConfig::default(),
            turns: 1.0,
            spin_seconds: 6.0,
            color: Color::BLUE,
            stroke_width: 3.0,
            fill_opacity: 0.3,
            dot_radius: 0.08,
            hold_seconds: 1.0,
        }
    }
}

/// Step-by-step construction: ideal points, then the three geodesic sides
/// one at a time, then the filled triangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionConfig {
    pub disk: DiskConfig,
    pub angles: [f64; 3],
    pub side_colors: [Color; 3],
    pub stroke_width: f64,
    pub dot_radius: f64,
    pub fill_color: Color,
    pub fill_opacity: f64,
    pub hold_seconds: f64,
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        Self {
            disk: DiskConfig::default(),
            angles: [PI / 4.0, 3.0 * PI / 4.0, -PI / 2.0],
            side_colors: [Color::BLUE, Color::GREEN, Color::RED],
            stroke_width: 3.0,
            dot_radius: 0.1,
            fill_color: Color::BLUE,
            fill_opacity: 0.3,
            hold_seconds: 3.0,
        }
    }
}

/// A tagged scene selection with its configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "scene", rename_all = "kebab-case")]
pub enum SceneSpec {
    IdealTriangle(IdealTriangleConfig),
    Tessellation(TessellationConfig),
    Rotating(RotatingConfig),
    Construction(ConstructionConfig),
}

impl SceneSpec {
    pub fn name(&self) -> &'static str {
        match self {
            SceneSpec::IdealTriangle(_) => "ideal-triangle",
            SceneSpec::Tessellation(_) => "tessellation",
            SceneSpec::Rotating(_) => "rotating",
            SceneSpec::Construction(_) => "construction",
        }
    }
}
