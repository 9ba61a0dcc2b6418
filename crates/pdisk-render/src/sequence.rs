//! Frame sequences: sample a scene at a fixed rate and render every frame.
//!
//! Sampling is stateless, so frames are rendered in parallel and still come
//! back in time order.

use std::path::Path;

use rayon::prelude::*;

use pdisk_core::{PdiskError, Result};
use pdisk_scene::{Color, Frame, Scene};

use crate::svg::frame_to_svg;
use crate::viewport::Viewport;

/// Output settings shared by the frame-sequence and player exporters.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub fps: f64,             // frames per second
    pub chord_tolerance: f64, // tessellation tolerance in world units
    pub background: Color,    // canvas background
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fps: 30.0,
            chord_tolerance: 1e-3,
            background: Color::BLACK,
        }
    }
}

/// Sample times for a clip: one frame every `1/fps` seconds, inclusive of
/// both endpoints. The last frame lands exactly on `duration`.
pub fn frame_times(duration: f64, fps: f64) -> Vec<f64> {
    let count = (duration * fps).ceil() as usize + 1;
    (0..count).map(|i| (i as f64 / fps).min(duration)).collect()
}

/// Sample every frame of a scene, in parallel.
pub fn sample_frames(scene: &Scene, opts: &RenderOptions) -> Result<Vec<Frame>> {
    if opts.fps <= 0.0 {
        return Err(PdiskError::Config(format!(
            "fps must be positive, got {}",
            opts.fps
        )));
    }
    frame_times(scene.duration(), opts.fps)
        .par_iter()
        .map(|&t| scene.sample(t, opts.chord_tolerance))
        .collect()
}

/// Render every frame of a scene to an SVG document, in parallel.
pub fn render_frames(scene: &Scene, opts: &RenderOptions, viewport: &Viewport) -> Result<Vec<String>> {
    let frames = sample_frames(scene, opts)?;
    Ok(frames
        .par_iter()
        .map(|frame| frame_to_svg(frame, viewport, opts.background))
        .collect())
}

/// Write one numbered SVG per frame into `dir`, creating it if needed.
/// Returns the number of frames written. External tools rasterize and encode
/// the sequence (resvg, ffmpeg).
pub fn export_frame_sequence(
    scene: &Scene,
    opts: &RenderOptions,
    viewport: &Viewport,
    dir: &Path,
) -> Result<usize> {
    std::fs::create_dir_all(dir)?;
    let frames = render_frames(scene, opts, viewport)?;
    for (i, svg) in frames.iter().enumerate() {
        std::fs::write(dir.join(format!("frame_{:04}.svg", i)), svg)?;
    }
    Ok(frames.len())
}
