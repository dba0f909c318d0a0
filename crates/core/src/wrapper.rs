//! Root-wrapper enforcement and the empty-input placeholder.

use crate::normalize::NormalizeOptions;

/// Returns true when the trimmed input is exactly one root element of the
/// designated wrapper tag, spanning start to end.
///
/// Depth-checked so that a nested element of the same tag name does not
/// fool the detection. Attribute values are not inspected; the catalog
/// never puts tag text inside attributes.
pub fn is_single_root(input: &str, tag: &str) -> bool {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);

    let Some(after_open) = input.strip_prefix(open.as_str()) else {
        return false;
    };
    if !after_open.starts_with(|c: char| c == '>' || c.is_whitespace()) {
        return false;
    }
    if !input.ends_with(close.as_str()) {
        return false;
    }

    let mut depth = 0usize;
    let mut idx = 0;
    while idx < input.len() {
        if input[idx..].starts_with(close.as_str()) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return idx + close.len() == input.len();
            }
            idx += close.len();
        } else if opens_tag_at(input, idx, &open) {
            depth += 1;
            idx += open.len();
        } else {
            idx += input[idx..].chars().next().map_or(1, char::len_utf8);
        }
    }
    false
}

/// Does an opening tag of exactly this name start at `idx`?
fn opens_tag_at(input: &str, idx: usize, open: &str) -> bool {
    input[idx..].starts_with(open)
        && input[idx + open.len()..].starts_with(|c: char| c == '>' || c == '/' || c.is_whitespace())
}

/// Wrap markup in the default root container.
pub fn wrap_in_root(inner: &str, options: &NormalizeOptions) -> String {
    format!(
        "<{tag} class=\"{class}\">\n{inner}\n</{tag}>",
        tag = options.root_tag,
        class = options.root_class,
        inner = inner,
    )
}

/// Deterministic placeholder for empty or whitespace-only input.
pub fn placeholder(options: &NormalizeOptions) -> String {
    wrap_in_root(&format!("  <!-- {} -->", options.placeholder_text), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_single_root() {
        assert!(is_single_root("<section class=\"x\">hi</section>", "section"));
        assert!(is_single_root("<section>\n  <div>a</div>\n</section>", "section"));
    }

    #[test]
    fn rejects_other_roots() {
        assert!(!is_single_root("<div>hi</div>", "section"));
        assert!(!is_single_root("hi", "section"));
    }

    #[test]
    fn rejects_sibling_sections() {
        assert!(!is_single_root(
            "<section>a</section><section>b</section>",
            "section"
        ));
    }

    #[test]
    fn nested_same_tag_still_single_root() {
        assert!(is_single_root(
            "<section><section>inner</section></section>",
            "section"
        ));
    }

    #[test]
    fn longer_tag_name_does_not_match() {
        assert!(!is_single_root("<sections>hi</sections>", "section"));
    }

    #[test]
    fn placeholder_is_single_root() {
        let options = NormalizeOptions::ocean();
        let out = placeholder(&options);
        assert!(is_single_root(&out, &options.root_tag));
        assert!(out.contains("<!--"));
    }
}
