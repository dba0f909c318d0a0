//! Fragment shorthand collapse and self-closing tag expansion.

/// Elements that stay self-closing in static markup.
///
/// Everything outside this set gets an explicit closing tag so consumers
/// that do not support self-closing-for-everything still render correctly.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Rewrite fragment shorthand (`<>` / `</>`) into an explicit container.
///
/// The container carries a default styling class so the result always has a
/// nameable root candidate.
pub fn collapse_fragments(input: &str, container_class: &str) -> String {
    if !input.contains("<>") && !input.contains("</>") {
        return input.to_string();
    }
    input
        .replace("</>", "</div>")
        .replace("<>", &format!("<div class=\"{}\">", container_class))
}

/// One scanned opening tag.
struct TagScan<'a> {
    name: &'a str,
    attrs: &'a str,
    self_closing: bool,
    /// Byte index just past the closing `>`.
    end: usize,
}

/// Scan a tag starting at the `<` at `start`. Returns `None` for anything
/// that does not read as an opening tag (closers, comments, stray brackets).
fn scan_tag(input: &str, start: usize) -> Option<TagScan<'_>> {
    let rest = &input[start + 1..];
    let name_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let name = &rest[..name_len];

    let after_name = start + 1 + name_len;
    let mut quote: Option<char> = None;
    let mut close = None;
    for (off, c) in input[after_name..].char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '>' => {
                    close = Some(after_name + off);
                    break;
                }
                '<' => return None,
                _ => {}
            },
        }
    }
    let close = close?;

    let inner = &input[after_name..close];
    let trimmed = inner.trim_end();
    let self_closing = trimmed.ends_with('/');
    let attrs = if self_closing {
        trimmed[..trimmed.len() - 1].trim_end()
    } else {
        inner
    };

    Some(TagScan {
        name,
        attrs,
        self_closing,
        end: close + 1,
    })
}

/// Expand self-closing non-void elements into explicit open/close pairs.
///
/// `<div class="a" />` becomes `<div class="a"></div>`; the fixed void set
/// (`<input/>`, `<br/>`, ...) passes through unchanged.
pub fn expand_self_closing(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < input.len() {
        if bytes[i] == b'<'
            && i + 1 < input.len()
            && bytes[i + 1].is_ascii_alphabetic()
            && let Some(tag) = scan_tag(input, i)
        {
            let is_void = VOID_ELEMENTS.contains(&tag.name.to_ascii_lowercase().as_str());
            if tag.self_closing && !is_void {
                out.push('<');
                out.push_str(tag.name);
                out.push_str(tag.attrs);
                out.push_str("></");
                out.push_str(tag.name);
                out.push('>');
            } else {
                out.push_str(&input[i..tag.end]);
            }
            i = tag.end;
            continue;
        }
        let c = input[i..].chars().next().unwrap_or('\0');
        out.push(c);
        i += c.len_utf8().max(1);
    }
    out
}
