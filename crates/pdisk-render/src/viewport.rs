use pdisk_math::{Aabb2, Point2};

/// Maps world coordinates onto a pixel canvas.
///
/// World y points up, pixel y points down; `to_screen` does the flip. The
/// scale is uniform and fixed by `world_height`, so `width` only controls how
/// wide a strip of the world is visible.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub width: u32,        // canvas width in pixels
    pub height: u32,       // canvas height in pixels
    pub world_height: f64, // world units spanned vertically
    pub center: Point2,    // world point at the canvas center
}

impl Viewport {
    /// Create a viewport with explicit parameters.
    pub fn new(width: u32, height: u32, world_height: f64, center: Point2) -> Self {
        Self {
            width,
            height,
            world_height,
            center,
        }
    }

    /// The default canvas: 1280x720 pixels spanning 8 world units vertically,
    /// centered on the origin.
    pub fn standard() -> Self {
        Self {
            width: 1280,
            height: 720,
            world_height: 8.0,
            center: Point2::ZERO,
        }
    }

    /// Create a viewport sized to show `aabb` with `margin` world units of
    /// breathing room on every side.
    pub fn fit(aabb: &Aabb2, width: u32, height: u32, margin: f64) -> Self {
        let ext = aabb.extents();
        let aspect = height as f64 / width as f64;
        let world_height = (ext.y + 2.0 * margin).max((ext.x + 2.0 * margin) * aspect);
        Self {
            width,
            height,
            world_height,
            center: aabb.center(),
        }
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.height as f64 / self.world_height
    }

    /// World point to pixel coordinates (y flipped).
    pub fn to_screen(&self, p: Point2) -> Point2 {
        let s = self.scale();
        Point2::new(
            self.width as f64 / 2.0 + (p.x - self.center.x) * s,
            self.height as f64 / 2.0 - (p.y - self.center.y) * s,
        )
    }

    /// Pixel coordinates back to the world point.
    pub fn to_world(&self, p: Point2) -> Point2 {
        let s = self.scale();
        Point2::new(
            self.center.x + (p.x - self.width as f64 / 2.0) / s,
            self.center.y - (p.y - self.height as f64 / 2.0) / s,
        )
    }

    /// Stroke width in pixels. Widths are specified for a 720-pixel-tall
    /// canvas and scale with the actual height.
    pub fn stroke_px(&self, width: f64) -> f64 {
        width * self.height as f64 / 720.0
    }

    /// Font size in pixels, scaled the same way as stroke widths.
    pub fn font_px(&self, size: f64) -> f64 {
        size * self.height as f64 / 720.0
    }
}
