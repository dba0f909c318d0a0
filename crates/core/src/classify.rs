//! Input classification for the normalizer.
//!
//! Classification happens once, before any rewriting, and is threaded
//! explicitly through the pipeline: only component-flavored input gets the
//! definition-scaffolding strip.

/// Common HTML element names used to recognize already-static markup.
const KNOWN_ELEMENTS: &[&str] = &[
    "a",
    "aside",
    "blockquote",
    "br",
    "button",
    "div",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "img",
    "input",
    "label",
    "li",
    "main",
    "nav",
    "ol",
    "option",
    "p",
    "path",
    "section",
    "select",
    "span",
    "svg",
    "table",
    "tbody",
    "td",
    "textarea",
    "th",
    "thead",
    "tr",
    "ul",
];

/// How the raw input reads before any rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain markup with static attributes; definition unwrapping is skipped.
    AlreadyMarkup,
    /// Component-definition-flavored source that may need unwrapping first.
    ComponentFlavored,
}

/// Classify trimmed input once, before the rewrite passes run.
///
/// Input counts as markup when it carries the static-attribute marker
/// (`class="`) or opens directly with a known common element. Everything
/// else (definition headers, fragments, component tags, bare expressions)
/// is component-flavored.
pub fn classify_source(input: &str) -> SourceKind {
    if input.contains("class=\"") {
        return SourceKind::AlreadyMarkup;
    }
    if let Some(rest) = input.strip_prefix('<') {
        let name_end = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        if KNOWN_ELEMENTS.contains(&name) {
            return SourceKind::AlreadyMarkup;
        }
    }
    SourceKind::ComponentFlavored
}
