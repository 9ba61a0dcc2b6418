//! PDiskStudio output boundary: world-to-pixel viewports, SVG frame writing,
//! parallel frame sequences, and the self-contained HTML player. Rasterizing
//! and video encoding stay with external tools (browser, resvg, ffmpeg).

pub mod html;
pub mod sequence;
pub mod svg;
pub mod viewport;

// Re-export main types
pub use html::export_html;
pub use sequence::{export_frame_sequence, frame_times, render_frames, sample_frames, RenderOptions};
pub use svg::{export_svg, frame_to_svg};
pub use viewport::Viewport;
