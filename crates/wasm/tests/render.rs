use oceanui_wasm::{catalog_keys, normalize, render_entry, sidebar};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct EntryCard {
    title: String,
    description: Option<String>,
    preview_html: String,
    markup: String,
    highlighted_markup: String,
    found: bool,
}

#[wasm_bindgen_test]
fn normalize_with_default_options() {
    let out = normalize("<div className=\"x\">hi</div>", JsValue::NULL);
    assert!(out.starts_with("<section"));
    assert!(out.contains("class=\"x\""));
    assert!(!out.contains("className"));
}

#[wasm_bindgen_test]
fn normalize_accepts_custom_root_tag() {
    let config = serde_wasm_bindgen::to_value(&serde_json::json!({"rootTag": "main"}))
        .expect("build config");
    let out = normalize("<div>hi</div>", config);
    assert!(out.starts_with("<main"));
}

#[wasm_bindgen_test]
fn catalog_keys_start_with_hero() {
    let keys = catalog_keys();
    assert_eq!(keys.get(0).as_string().as_deref(), Some("hero"));
    assert!(keys.length() >= 21);
}

#[wasm_bindgen_test]
fn sidebar_serializes_groups() {
    let value = sidebar().expect("sidebar should serialize");
    let groups = js_sys::Array::from(&value);
    assert_eq!(groups.length(), 1);
}

#[wasm_bindgen_test]
fn render_entry_returns_card() {
    let result = render_entry("hero", JsValue::NULL).expect("render should succeed");
    let card: EntryCard = serde_wasm_bindgen::from_value(result).expect("deserialize card");

    assert!(card.found);
    assert_eq!(card.title, "Hero");
    assert!(card.description.is_some());
    assert!(card.markup.starts_with("<section"));
    assert!(!card.markup.contains("className"));
    assert!(card.preview_html.contains("Build faster with Ocean UI"));
    assert!(card.highlighted_markup.contains("token tag"));
}

#[wasm_bindgen_test]
fn render_entry_unknown_key_is_placeholder() {
    let result = render_entry("does-not-exist", JsValue::NULL).expect("render should succeed");
    let card: EntryCard = serde_wasm_bindgen::from_value(result).expect("deserialize card");

    assert!(!card.found);
    assert!(card.markup.contains("No markup provided"));
}
