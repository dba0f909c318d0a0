//! The viewer: selection key in, display card out.
//!
//! A card bundles everything the shell renders for one entry: the live
//! preview HTML, the normalized copy-ready snippet, and its highlighted
//! form. The catalog is injected read-only; a missing key resolves to a
//! neutral placeholder card, never an error.

use log::{debug, warn};
use oceanui_core::{NormalizeOptions, NormalizePipeline};

use crate::clipboard::{Clipboard, ClipboardError, CopyFeedback};
use crate::highlight::Highlighter;
use crate::preview::render_preview;
use crate::registry::CatalogConfig;

/// Language tag handed to the highlighter for normalized snippets.
pub const SNIPPET_LANGUAGE: &str = "html";

/// Everything the shell needs to display one selected entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerCard {
    /// Entry title, or the not-found heading.
    pub title: String,
    /// Optional description line.
    pub description: Option<String>,
    /// Rendered live-preview HTML.
    pub preview_html: String,
    /// Normalized, copy-ready markup.
    pub markup: String,
    /// Highlighted markup for the read-only code view.
    pub highlighted_markup: String,
    /// False when the key did not resolve to an entry.
    pub found: bool,
}

/// Read-only viewer over an injected catalog.
pub struct Viewer<'a, H: Highlighter> {
    catalog: &'a CatalogConfig,
    pipeline: NormalizePipeline,
    highlighter: H,
}

impl<'a, H: Highlighter> Viewer<'a, H> {
    /// A viewer with the Ocean normalizer defaults.
    pub fn new(catalog: &'a CatalogConfig, highlighter: H) -> Self {
        Self::with_options(catalog, highlighter, NormalizeOptions::ocean())
    }

    /// A viewer with explicit normalizer options.
    pub fn with_options(
        catalog: &'a CatalogConfig,
        highlighter: H,
        options: NormalizeOptions,
    ) -> Self {
        Self {
            catalog,
            pipeline: NormalizePipeline::new(options),
            highlighter,
        }
    }

    /// Resolve a selection key into a display card.
    pub fn card_for(&self, key: &str) -> ViewerCard {
        let Some(entry) = self.catalog.entry(key) else {
            debug!("no catalog entry for key {:?}", key);
            return self.not_found_card();
        };
        let (markup, diagnostics) = self.pipeline.run(&entry.raw_markup);
        for warning in &diagnostics.warnings {
            debug!("normalizing {}: {}", entry.key, warning);
        }
        let highlighted_markup = self.highlighter.highlight(&markup, SNIPPET_LANGUAGE);
        ViewerCard {
            title: entry.title.clone(),
            description: entry.description.clone(),
            preview_html: render_preview(&entry.preview),
            markup,
            highlighted_markup,
            found: true,
        }
    }

    fn not_found_card(&self) -> ViewerCard {
        let (markup, _) = self.pipeline.run("");
        let highlighted_markup = self.highlighter.highlight(&markup, SNIPPET_LANGUAGE);
        ViewerCard {
            title: "Nothing selected".to_string(),
            description: Some(
                "Pick an item from the sidebar to see its preview and code.".to_string(),
            ),
            preview_html:
                "<div class=\"rounded-2xl border border-dashed border-gray-300 bg-white p-6\"></div>"
                    .to_string(),
            markup,
            highlighted_markup,
            found: false,
        }
    }

    /// Copy the entry's normalized markup, recording transient feedback.
    /// On failure the caller should offer `ViewerCard::markup` for manual
    /// selection instead.
    pub fn copy_markup(
        &self,
        key: &str,
        clipboard: &mut dyn Clipboard,
        feedback: &mut CopyFeedback,
    ) -> Result<(), ClipboardError> {
        let card = self.card_for(key);
        match clipboard.copy(&card.markup) {
            Ok(()) => {
                feedback.mark_copied();
                Ok(())
            }
            Err(err) => {
                warn!("copy failed for {:?}: {}", key, err);
                feedback.mark_failed(&err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::highlight::{MarkupHighlighter, PlainHighlighter};
    use crate::registry::default_ocean_catalog;

    #[test]
    fn card_for_known_entry() {
        let viewer = Viewer::new(default_ocean_catalog(), MarkupHighlighter);
        let card = viewer.card_for("hero");
        assert!(card.found);
        assert_eq!(card.title, "Hero");
        assert!(card.markup.starts_with("<section"));
        assert!(!card.markup.contains("className"));
        assert!(card.preview_html.contains("Build faster with Ocean UI"));
        assert!(card.highlighted_markup.contains("token tag"));
    }

    #[test]
    fn missing_key_yields_placeholder_card() {
        let viewer = Viewer::new(default_ocean_catalog(), PlainHighlighter);
        let card = viewer.card_for("nope");
        assert!(!card.found);
        assert_eq!(card.title, "Nothing selected");
        assert!(card.markup.contains("No markup provided"));
    }

    #[test]
    fn every_card_is_renderable() {
        let viewer = Viewer::new(default_ocean_catalog(), MarkupHighlighter);
        for key in default_ocean_catalog().keys() {
            let card = viewer.card_for(key);
            assert!(card.found, "key {}", key);
            assert!(!card.preview_html.is_empty(), "key {}", key);
            assert!(!card.highlighted_markup.is_empty(), "key {}", key);
        }
    }

    #[test]
    fn copy_puts_normalized_markup_on_the_clipboard() {
        let viewer = Viewer::new(default_ocean_catalog(), PlainHighlighter);
        let mut clipboard = MemoryClipboard::new();
        let mut feedback = CopyFeedback::new();
        viewer
            .copy_markup("cta", &mut clipboard, &mut feedback)
            .unwrap();
        assert!(feedback.is_active());
        let copied = clipboard.contents.unwrap();
        assert!(copied.starts_with("<section"));
        assert!(!copied.contains("const"));
    }

    #[test]
    fn failing_clipboard_records_a_notice() {
        struct Broken;
        impl Clipboard for Broken {
            fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
                Err(ClipboardError::Unavailable("no permission".to_string()))
            }
        }
        let viewer = Viewer::new(default_ocean_catalog(), PlainHighlighter);
        let mut feedback = CopyFeedback::new();
        let err = viewer
            .copy_markup("cta", &mut Broken, &mut feedback)
            .unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
        assert!(!feedback.is_active());
        assert!(feedback.failure_notice().unwrap().contains("no permission"));
    }
}
