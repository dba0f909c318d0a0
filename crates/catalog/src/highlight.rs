//! Syntax highlighting for the read-only code view.
//!
//! Highlighting is cosmetic: every implementation must return displayable
//! markup for every input, degrading to escaped plain text rather than
//! failing.

use html_escape::encode_text;

/// Turns a code snippet into display markup. Must never fail; when a
/// language is unsupported the snippet comes back as escaped plain text.
pub trait Highlighter {
    /// Highlight `text` for `language`.
    fn highlight(&self, text: &str, language: &str) -> String;
}

/// The fallback every highlighter degrades to: escape and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, text: &str, _language: &str) -> String {
        encode_text(text).into_owned()
    }
}

/// A small markup tokenizer emitting Prism-compatible token spans for
/// tags and attribute values. Non-markup languages fall back to plain.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupHighlighter;

impl Highlighter for MarkupHighlighter {
    fn highlight(&self, text: &str, language: &str) -> String {
        match language {
            "html" | "markup" | "xml" => highlight_markup(text),
            _ => PlainHighlighter.highlight(text, language),
        }
    }
}

/// Index of the closing `>` of the tag starting at byte 0, skipping over
/// quoted attribute values.
fn tag_end(tag: &str) -> Option<usize> {
    let bytes = tag.as_bytes();
    let mut quote = None;
    for (i, &b) in bytes.iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"') | (None, b'\'') => quote = Some(b),
            (None, b'>') => return Some(i),
            _ => {}
        }
    }
    None
}

fn push_tag_tokens(tag: &str, out: &mut String) {
    let mut rest = tag;
    while let Some(open) = rest.find(['"', '\'']) {
        let quote = rest.as_bytes()[open] as char;
        out.push_str(&encode_text(&rest[..open]));
        match rest[open + 1..].find(quote) {
            Some(len) => {
                let value = &rest[open..open + len + 2];
                out.push_str("<span class=\"token attr-value\">");
                out.push_str(&encode_text(value));
                out.push_str("</span>");
                rest = &rest[open + len + 2..];
            }
            None => {
                out.push_str(&encode_text(&rest[open..]));
                return;
            }
        }
    }
    out.push_str(&encode_text(rest));
}

fn highlight_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&encode_text(&rest[..open]));
        match tag_end(&rest[open..]) {
            Some(end) => {
                out.push_str("<span class=\"token tag\">");
                push_tag_tokens(&rest[open..=open + end], &mut out);
                out.push_str("</span>");
                rest = &rest[open + end + 1..];
            }
            None => {
                // Stray bracket: the remainder is plain text.
                out.push_str(&encode_text(&rest[open..]));
                return out;
            }
        }
    }
    out.push_str(&encode_text(rest));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_get_token_spans() {
        let out = MarkupHighlighter.highlight("<div class=\"x\">hi</div>", "html");
        assert!(out.starts_with("<span class=\"token tag\">&lt;div "));
        assert!(out.contains("<span class=\"token attr-value\">\"x\"</span>"));
        assert!(out.contains("hi"));
        assert!(out.ends_with("&lt;/div&gt;</span>"));
    }

    #[test]
    fn unknown_language_falls_back_to_plain() {
        let out = MarkupHighlighter.highlight("<div>hi</div>", "rust");
        assert_eq!(out, "&lt;div&gt;hi&lt;/div&gt;");
    }

    #[test]
    fn stray_bracket_is_plain_text() {
        let out = MarkupHighlighter.highlight("a < b", "html");
        assert_eq!(out, "a &lt; b");
    }

    #[test]
    fn plain_highlighter_only_escapes() {
        let out = PlainHighlighter.highlight("<x> & <y>", "html");
        assert_eq!(out, "&lt;x&gt; &amp; &lt;y&gt;");
    }
}
