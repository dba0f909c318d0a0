//! Preview descriptors.
//!
//! Each catalog entry carries a small declarative tree describing its live
//! preview. Three shapes cover the whole default catalog: a leaf element
//! with text, a container composing child descriptors, and a list element
//! instantiating one template per data item.

use serde::{Deserialize, Serialize};

/// One data item fed to a [`PreviewNode::ParametrizedList`] template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Primary text, substituted for `{label}` in the template.
    pub label: String,
    /// Secondary text, substituted for `{value}` in the template.
    #[serde(default)]
    pub value: String,
}

impl ListItem {
    /// A label-only item.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
        }
    }

    /// A label/value pair.
    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A renderable preview descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PreviewNode {
    /// A leaf element with optional text content.
    StaticElement {
        /// Element tag name.
        tag: String,
        /// Class attribute; empty means no class attribute is emitted.
        #[serde(default)]
        class: String,
        /// Text content, escaped on render.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// A container whose children are composed descriptors.
    ComposedChildren {
        /// Element tag name.
        tag: String,
        /// Class attribute; empty means no class attribute is emitted.
        #[serde(default)]
        class: String,
        /// Children in document order.
        children: Vec<PreviewNode>,
    },
    /// A list-like element rendering the item template once per item, with
    /// `{label}` and `{value}` placeholders filled in from the item.
    ParametrizedList {
        /// Element tag name.
        tag: String,
        /// Class attribute; empty means no class attribute is emitted.
        #[serde(default)]
        class: String,
        /// Template instantiated per item.
        item_template: Box<PreviewNode>,
        /// Data items, all of which are rendered.
        items: Vec<ListItem>,
    },
}

impl PreviewNode {
    /// A leaf element with text.
    pub fn element(tag: impl Into<String>, class: impl Into<String>, text: impl Into<String>) -> Self {
        PreviewNode::StaticElement {
            tag: tag.into(),
            class: class.into(),
            text: Some(text.into()),
        }
    }

    /// A leaf element with no text, used for decorative blocks.
    pub fn block(tag: impl Into<String>, class: impl Into<String>) -> Self {
        PreviewNode::StaticElement {
            tag: tag.into(),
            class: class.into(),
            text: None,
        }
    }

    /// A container composing child descriptors.
    pub fn container(
        tag: impl Into<String>,
        class: impl Into<String>,
        children: Vec<PreviewNode>,
    ) -> Self {
        PreviewNode::ComposedChildren {
            tag: tag.into(),
            class: class.into(),
            children,
        }
    }

    /// A list element instantiating `template` once per item.
    pub fn list(
        tag: impl Into<String>,
        class: impl Into<String>,
        template: PreviewNode,
        items: Vec<ListItem>,
    ) -> Self {
        PreviewNode::ParametrizedList {
            tag: tag.into(),
            class: class.into(),
            item_template: Box::new(template),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_serialization() {
        let node = PreviewNode::element("h1", "text-3xl", "Hello");
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"staticElement\""));
        let back: PreviewNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn list_round_trip() {
        let node = PreviewNode::list(
            "ul",
            "grid",
            PreviewNode::element("li", "row", "{label}"),
            vec![ListItem::new("One"), ListItem::with_value("Two", "2")],
        );
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"parametrizedList\""));
        assert!(json.contains("\"itemTemplate\""));
        let back: PreviewNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
