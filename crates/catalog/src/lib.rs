#![deny(missing_docs)]
//! Ocean UI catalog: the keyed registry of copy-ready page sections and
//! the glue that turns a selection into something displayable.
//!
//! The crate is UI-framework agnostic. It owns the catalog data model,
//! a declarative preview renderer, snippet highlighting, selection state
//! with shareable-location sync, and clipboard feedback. The actual DOM
//! shell lives elsewhere and consumes [`viewer::ViewerCard`] values.

/// Clipboard capability and transient copy feedback.
pub mod clipboard;
/// Syntax highlighting for the code view.
pub mod highlight;
/// Declarative preview descriptors and rendering.
pub mod preview;
/// Catalog entry types and the built-in block set.
pub mod registry;
/// Selection state and shareable-location sync.
pub mod selection;
/// Selection-to-card resolution.
pub mod viewer;

pub use clipboard::{Clipboard, ClipboardError, CopyFeedback, MemoryClipboard};
pub use highlight::{Highlighter, MarkupHighlighter, PlainHighlighter};
pub use preview::{ListItem, PreviewNode, render_preview};
pub use registry::{
    CatalogConfig, CatalogConfigError, CatalogEntry, CatalogGroup, default_ocean_catalog,
};
pub use selection::{LocationSync, MemoryLocation, SelectionController};
pub use viewer::{Viewer, ViewerCard};
