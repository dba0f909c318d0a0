//! Dynamic-attribute spelling rewrites.

/// Dynamic attribute spellings and their static equivalents.
///
/// `className` is the load-bearing rewrite: every catalog entry uses it.
/// `htmlFor` rides along for label markup.
pub const RENAMED_ATTRIBUTES: &[(&str, &str)] = &[("className=", "class="), ("htmlFor=", "for=")];

/// Rewrite dynamic-style attribute spellings to their static equivalents.
///
/// Plain substring replacement, matching the source material exactly; the
/// spellings are distinctive enough that attribute-position tracking is
/// not needed.
pub fn rewrite_dynamic_attributes(input: &str) -> String {
    let mut out = input.to_string();
    for (dynamic, stat) in RENAMED_ATTRIBUTES {
        if out.contains(dynamic) {
            out = out.replace(dynamic, stat);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_class_name() {
        let out = rewrite_dynamic_attributes("<div className=\"x\">y</div>");
        assert_eq!(out, "<div class=\"x\">y</div>");
        assert!(!out.contains("className"));
    }

    #[test]
    fn rewrites_html_for() {
        let out = rewrite_dynamic_attributes("<label htmlFor=\"email\">Email</label>");
        assert_eq!(out, "<label for=\"email\">Email</label>");
    }

    #[test]
    fn leaves_static_markup_alone() {
        let input = "<div class=\"x\">y</div>";
        assert_eq!(rewrite_dynamic_attributes(input), input);
    }
}
