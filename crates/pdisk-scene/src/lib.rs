//! PDiskStudio scene graph: drawable elements over the disk model, cue-based
//! timelines, frame sampling, and the built-in scene catalog.

pub mod catalog;
pub mod config;
pub mod element;
pub mod frame;
pub mod scene;
pub mod style;
pub mod timeline;

pub use element::{Element, ElementId, ElementKind};
pub use frame::{Drawable, Frame, Shape};
pub use scene::Scene;
pub use style::{Color, Fill, Stroke};
pub use timeline::{Action, Cue, Easing};
