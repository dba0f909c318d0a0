//! WASM bindings for the Ocean UI catalog and normalizer.
//!
//! The JavaScript shell drives everything through three functions:
//! `normalize` for ad-hoc fragments, `sidebar` for navigation data, and
//! `render_entry` to resolve a selection key into a display card.

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use oceanui_catalog::{MarkupHighlighter, Viewer, default_ocean_catalog};
use oceanui_core::{NormalizeOptions, normalize_with_diagnostics};

/// Parse normalizer options from JavaScript; `null`/`undefined` and
/// malformed objects fall back to the Ocean defaults.
fn parse_options(config: JsValue) -> NormalizeOptions {
    if config.is_undefined() || config.is_null() {
        return NormalizeOptions::ocean();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

/// Normalizes a raw markup fragment into one root-wrapped static block.
///
/// # Arguments
///
/// * `source` - The raw fragment, possibly JSX-flavored
/// * `config` - Optional options object (`rootTag`, `rootClass`,
///   `fragmentClass`, `placeholderText`)
///
/// # Returns
///
/// The normalized markup string. Normalization is total; there is no
/// error case.
#[wasm_bindgen]
pub fn normalize(source: &str, config: JsValue) -> String {
    let options = parse_options(config);
    normalize_with_diagnostics(source, &options).0
}

/// Normalizes a fragment and also returns the collected warnings.
///
/// # Returns
///
/// `{ markup: string, warnings: [{kind, offset}] }`
#[wasm_bindgen(js_name = normalize_with_warnings)]
pub fn normalize_with_warnings(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct NormalizeReport<'a> {
        markup: String,
        warnings: &'a [oceanui_core::RewriteWarning],
    }

    let options = parse_options(config);
    let (markup, diagnostics) = normalize_with_diagnostics(source, &options);
    let report = NormalizeReport {
        markup,
        warnings: &diagnostics.warnings,
    };
    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// All selection keys of the built-in catalog, in display order.
#[wasm_bindgen]
pub fn catalog_keys() -> js_sys::Array {
    default_ocean_catalog()
        .keys()
        .map(JsValue::from)
        .collect::<js_sys::Array>()
}

/// Sidebar groups of the built-in catalog.
///
/// # Returns
///
/// An array of `{key, label, items: [{label, key}]}` objects.
#[wasm_bindgen]
pub fn sidebar() -> Result<JsValue, JsError> {
    let groups = default_ocean_catalog().sidebar_groups();
    serde_wasm_bindgen::to_value(&groups)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Display card serialized for the JavaScript shell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCard {
    /// Entry title, or the not-found heading.
    pub title: String,
    /// Optional description line.
    pub description: Option<String>,
    /// Rendered live-preview HTML.
    pub preview_html: String,
    /// Normalized, copy-ready markup.
    pub markup: String,
    /// Highlighted markup for the code view.
    pub highlighted_markup: String,
    /// False when the key did not resolve to an entry.
    pub found: bool,
}

/// Resolves a selection key into a display card over the built-in catalog.
///
/// # Arguments
///
/// * `key` - The selection key (the `item` query parameter value)
/// * `config` - Optional normalizer options object
///
/// # Returns
///
/// `{title, description, previewHtml, markup, highlightedMarkup, found}`.
/// An unknown key yields the neutral placeholder card with `found: false`.
#[wasm_bindgen]
pub fn render_entry(key: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(config);
    let viewer = Viewer::with_options(default_ocean_catalog(), MarkupHighlighter, options);
    let card = viewer.card_for(key);
    let result = EntryCard {
        title: card.title,
        description: card.description,
        preview_html: card.preview_html,
        markup: card.markup,
        highlighted_markup: card.highlighted_markup,
        found: card.found,
    };
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
