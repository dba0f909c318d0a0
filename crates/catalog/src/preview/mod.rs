//! Declarative preview descriptors and their HTML renderer.

mod render;
mod types;

pub use render::render_preview;
pub use types::{ListItem, PreviewNode};
