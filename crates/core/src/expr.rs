//! Dynamic-expression hole stripping.
//!
//! Recognized hole shapes, in rewrite order:
//!
//! 1. `{/* comment */}` — removed.
//! 2. `{children}` — removed; a pass-through children placeholder has no
//!    static equivalent.
//! 3. `{xs.map((x) => ( <child/> ))}` — collapsed to the single child
//!    template. The repetition count is lost on purpose: the snippet shows
//!    one representative item.
//! 4. `{"literal"}` / `{'literal'}` — replaced by the literal content
//!    (re-quoted when sitting in attribute position).
//! 5. `attr={expr}` — the whole attribute removed, brace-balanced.
//! 6. any remaining hole with brace-free content — removed.
//!
//! Anything else (unmatched braces, nested-brace holes) is left alone.

use crate::diagnostics::{NormalizeDiagnostics, RewriteWarning};

/// Strip recognized dynamic-expression holes from the fragment.
pub fn strip_expressions(input: &str, diagnostics: &mut NormalizeDiagnostics) -> String {
    let mut out = strip_comments(input);
    out = strip_children_holes(&out);
    out = collapse_repeat_patterns(&out, diagnostics);
    out = inline_string_literals(&out);
    out = strip_attribute_holes(&out);
    strip_simple_holes(&out, diagnostics)
}

/// Remove `{/* ... */}` comment holes.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("{/*") {
        match rest[start..].find("*/}") {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + end + 3..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Remove pass-through children placeholders.
fn strip_children_holes(input: &str) -> String {
    if !input.contains("children") {
        return input.to_string();
    }
    input.replace("{children}", "").replace("{ children }", "")
}

/// A matched repeat pattern, with offsets relative to the opening brace.
struct RepeatPattern {
    child_start: usize,
    child_end: usize,
    /// Offset just past the closing brace of the hole.
    end: usize,
}

/// Skip ASCII whitespace starting at `from`, returning the next index.
fn skip_whitespace(s: &str, from: usize) -> usize {
    from + s[from..].len() - s[from..].trim_start().len()
}

/// Find the `)` matching the `(` that `s` starts with. Quote-aware.
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (off, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(off);
                    }
                }
                _ => {}
            },
        }
    }
    None
}

/// Find the `}` matching the `{` that `s` starts with. Quote-aware.
fn matching_brace(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (off, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(off);
                    }
                }
                _ => {}
            },
        }
    }
    None
}

/// Try to read `{subject.map((args) => ( child ))}` from a slice starting
/// at an opening brace.
fn find_repeat_pattern(hole: &str) -> Option<RepeatPattern> {
    let map_at = hole.find(".map(")?;
    // The subject between `{` and `.map(` must itself be brace-free.
    if hole[1..map_at].contains(['{', '}']) {
        return None;
    }
    let after_map = map_at + ".map(".len();
    let arrow = after_map + hole[after_map..].find("=>")? + 2;
    let child_open = skip_whitespace(hole, arrow);
    if !hole[child_open..].starts_with('(') {
        return None;
    }
    let child_close = child_open + matching_paren(&hole[child_open..])?;
    // After the child: `)` closing the map call, then `}` closing the hole.
    let mut idx = skip_whitespace(hole, child_close + 1);
    if !hole[idx..].starts_with(')') {
        return None;
    }
    idx = skip_whitespace(hole, idx + 1);
    if !hole[idx..].starts_with('}') {
        return None;
    }
    Some(RepeatPattern {
        child_start: child_open + 1,
        child_end: child_close,
        end: idx + 1,
    })
}

/// Collapse repeat-over-a-list patterns to their single child template.
///
/// Scanning resumes after each collapsed child, so a repeat nested inside
/// the child survives this pass: only the outermost pattern is collapsed.
fn collapse_repeat_patterns(input: &str, diagnostics: &mut NormalizeDiagnostics) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    let mut consumed = 0usize;
    while let Some(h) = rest.find('{') {
        match find_repeat_pattern(&rest[h..]) {
            Some(pattern) => {
                let child = rest[h + pattern.child_start..h + pattern.child_end].trim();
                if child.contains(".map(") {
                    diagnostics.push(RewriteWarning::NestedRepeatSkipped {
                        offset: consumed + h,
                    });
                }
                out.push_str(&rest[..h]);
                out.push_str(child);
                consumed += h + pattern.end;
                rest = &rest[h + pattern.end..];
            }
            None => {
                out.push_str(&rest[..h + 1]);
                consumed += h + 1;
                rest = &rest[h + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replace holes whose content is a single static string literal with the
/// literal itself. In attribute position (`={...}`) the quotes are kept.
fn inline_string_literals(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(h) = rest.find('{') {
        match string_literal_hole(&rest[h..]) {
            Some((content, end)) => {
                let in_attribute = rest[..h].ends_with('=');
                out.push_str(&rest[..h]);
                if in_attribute {
                    out.push('"');
                    out.push_str(content);
                    out.push('"');
                } else {
                    out.push_str(content);
                }
                rest = &rest[h + end..];
            }
            None => {
                out.push_str(&rest[..h + 1]);
                rest = &rest[h + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Try to read `{"literal"}` or `{'literal'}` from a slice starting at an
/// opening brace. Returns the literal content and the offset past `}`.
fn string_literal_hole(hole: &str) -> Option<(&str, usize)> {
    let quote_at = skip_whitespace(hole, 1);
    let quote = match hole[quote_at..].chars().next() {
        Some(c @ ('"' | '\'')) => c,
        _ => return None,
    };
    let close = quote_at + 1 + hole[quote_at + 1..].find(quote)?;
    let brace = skip_whitespace(hole, close + 1);
    if !hole[brace..].starts_with('}') {
        return None;
    }
    Some((&hole[quote_at + 1..close], brace + 1))
}

/// Remove whole `attr={expr}` attributes, brace-balanced.
fn strip_attribute_holes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(eq) = rest.find("={") {
        let before = &rest[..eq];
        let name_start = before
            .rfind(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
            .map(|p| p + 1)
            .unwrap_or(0);
        let in_attribute = name_start < eq
            && name_start > 0
            && before[..name_start].ends_with(|c: char| c.is_whitespace());
        match matching_brace(&rest[eq + 1..]) {
            Some(close) if in_attribute => {
                out.push_str(before[..name_start].trim_end());
                rest = &rest[eq + 1 + close + 1..];
            }
            _ => {
                out.push_str(&rest[..eq + 2]);
                rest = &rest[eq + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Remove remaining holes with brace-free content; leave anything with
/// nested or unmatched braces alone.
fn strip_simple_holes(input: &str, diagnostics: &mut NormalizeDiagnostics) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    let mut consumed = 0usize;
    while let Some(h) = rest.find('{') {
        match matching_brace(&rest[h..]) {
            Some(close) if !rest[h + 1..h + close].contains('{') => {
                out.push_str(&rest[..h]);
                consumed += h + close + 1;
                rest = &rest[h + close + 1..];
            }
            Some(close) => {
                // Nested braces: keep the whole hole, matching close included,
                // so repeated runs see the same input.
                out.push_str(&rest[..h + close + 1]);
                consumed += h + close + 1;
                rest = &rest[h + close + 1..];
            }
            None => {
                diagnostics.push(RewriteWarning::UnterminatedExpression {
                    offset: consumed + h,
                });
                out.push_str(&rest[..h + 1]);
                consumed += h + 1;
                rest = &rest[h + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(input: &str) -> String {
        let mut diagnostics = NormalizeDiagnostics::new();
        strip_expressions(input, &mut diagnostics)
    }

    #[test]
    fn removes_comments() {
        assert_eq!(strip("<div>{/* header */}hi</div>"), "<div>hi</div>");
    }

    #[test]
    fn removes_children_placeholder() {
        assert_eq!(strip("<div>{children}</div>"), "<div></div>");
        assert_eq!(strip("<div>{ children }</div>"), "<div></div>");
    }

    #[test]
    fn inlines_string_literal_text() {
        assert_eq!(strip("<div>{\"hello\"}</div>"), "<div>hello</div>");
        assert_eq!(strip("<div>{'hello'}</div>"), "<div>hello</div>");
    }

    #[test]
    fn requotes_string_literal_in_attribute_position() {
        assert_eq!(
            strip("<div title={\"hi\"}>x</div>"),
            "<div title=\"hi\">x</div>"
        );
    }

    #[test]
    fn removes_attribute_holes() {
        assert_eq!(
            strip("<div key={tier} class=\"a\">x</div>"),
            "<div class=\"a\">x</div>"
        );
    }

    #[test]
    fn removes_nested_attribute_holes() {
        assert_eq!(
            strip("<button onClick={() => toggle({ open: true })}>Go</button>"),
            "<button>Go</button>"
        );
    }

    #[test]
    fn collapses_repeat_to_single_child() {
        let input = "<ul>{items.map((item) => (\n  <li class=\"row\">one</li>\n))}</ul>";
        assert_eq!(strip(input), "<ul><li class=\"row\">one</li></ul>");
    }

    #[test]
    fn repeat_child_keeps_inner_holes_stripped() {
        let input = "<ul>{items.map((item) => (<li>{item.label}</li>))}</ul>";
        assert_eq!(strip(input), "<ul><li></li></ul>");
    }

    #[test]
    fn nested_repeat_left_as_is() {
        let input = "<div>{rows.map((row) => (<ul>{row.cells.map((cell) => (<li>{cell.label}</li>))}</ul>))}</div>";
        let mut diagnostics = NormalizeDiagnostics::new();
        let out = collapse_repeat_patterns(input, &mut diagnostics);
        assert!(out.contains(".map("), "inner repeat should survive: {}", out);
        assert!(
            diagnostics
                .warnings
                .iter()
                .any(|w| matches!(w, RewriteWarning::NestedRepeatSkipped { .. }))
        );
    }

    #[test]
    fn removes_simple_identifier_holes() {
        assert_eq!(strip("<div>{value}</div>"), "<div></div>");
        assert_eq!(strip("<div>{user.name}</div>"), "<div></div>");
    }

    #[test]
    fn nested_brace_hole_left_whole() {
        assert_eq!(strip("<div>{{a}}</div>"), "<div>{{a}}</div>");
        assert_eq!(
            strip("<div>{cond ? {a: 1} : {a: 2}}</div>"),
            "<div>{cond ? {a: 1} : {a: 2}}</div>"
        );
    }

    #[test]
    fn unmatched_brace_left_alone_with_warning() {
        let mut diagnostics = NormalizeDiagnostics::new();
        let out = strip_expressions("<div>{oops</div>", &mut diagnostics);
        assert_eq!(out, "<div>{oops</div>");
        assert_eq!(diagnostics.count(), 1);
    }
}
