//! Preview rendering: descriptor tree to escaped HTML.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::types::{ListItem, PreviewNode};

/// Render a preview descriptor to an HTML string. All text and attribute
/// values are escaped; descriptors cannot inject raw markup.
pub fn render_preview(node: &PreviewNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn open_tag(tag: &str, class: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&encode_double_quoted_attribute(class));
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_node(node: &PreviewNode, out: &mut String) {
    match node {
        PreviewNode::StaticElement { tag, class, text } => {
            open_tag(tag, class, out);
            if let Some(text) = text {
                out.push_str(&encode_text(text));
            }
            close_tag(tag, out);
        }
        PreviewNode::ComposedChildren {
            tag,
            class,
            children,
        } => {
            open_tag(tag, class, out);
            for child in children {
                write_node(child, out);
            }
            close_tag(tag, out);
        }
        PreviewNode::ParametrizedList {
            tag,
            class,
            item_template,
            items,
        } => {
            open_tag(tag, class, out);
            for item in items {
                write_instantiated(item_template, item, out);
            }
            close_tag(tag, out);
        }
    }
}

fn fill(template: &str, item: &ListItem) -> String {
    template
        .replace("{label}", &item.label)
        .replace("{value}", &item.value)
}

fn write_instantiated(template: &PreviewNode, item: &ListItem, out: &mut String) {
    match template {
        PreviewNode::StaticElement { tag, class, text } => {
            open_tag(tag, class, out);
            if let Some(text) = text {
                out.push_str(&encode_text(&fill(text, item)));
            }
            close_tag(tag, out);
        }
        PreviewNode::ComposedChildren {
            tag,
            class,
            children,
        } => {
            open_tag(tag, class, out);
            for child in children {
                write_instantiated(child, item, out);
            }
            close_tag(tag, out);
        }
        // Nested lists render with their own items, not the outer item.
        PreviewNode::ParametrizedList { .. } => write_node(template, out),
    }
}
