//! Node tree for the Birch HTML toolkit.
//!
//! # Design
//!
//! Every element is a [`Node`] that owns its children outright. There are no
//! parent back-references: ownership flows from the root downwards, so a tree
//! is acyclic by construction and whoever holds the root owns the whole tree.
//!
//! Tags carry no behaviour of their own. The two classifications the rest of
//! the toolkit cares about are plain lookups on the tag name:
//! - [`is_void_element`] - elements that never own children
//! - [`is_text_bearing`] - elements whose `text` field the parser fills in

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Map of attribute names to values, in first-insertion order.
///
/// Re-inserting an existing key replaces its value but keeps its position,
/// which gives last-wins semantics for duplicate attributes.
pub type AttributesMap = IndexMap<String, String>;

/// Elements that cannot own children and always render self-closing.
pub const VOID_ELEMENTS: [&str; 6] = ["br", "img", "input", "meta", "link", "hr"];

/// Elements eligible to carry a `text` value directly.
pub const TEXT_BEARING_ELEMENTS: [&str; 12] = [
    "title", "p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "a", "div", "body",
];

/// Tag given to free-standing text created with [`Node::text_node`].
pub const TEXT_CARRIER_TAG: &str = "span";

/// Returns true if `tag` names a void element.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Returns true if `tag` names a text-bearing element.
#[must_use]
pub fn is_text_bearing(tag: &str) -> bool {
    TEXT_BEARING_ELEMENTS.contains(&tag)
}

/// A single element in the tree.
///
/// Serializes (via serde) to a mapping with the keys `tag`, `attributes`,
/// `children` and `text`, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    /// The element's tag name, e.g. `div`.
    pub tag: String,
    /// Attribute list; keys are unique.
    pub attributes: AttributesMap,
    /// Child nodes in document order.
    pub children: Vec<Self>,
    /// Text content, set only on text-bearing elements.
    pub text: Option<String>,
}

impl Node {
    /// Create an element with no attributes, children or text.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create an element with the given attribute list.
    #[must_use]
    pub fn with_attributes(tag: impl Into<String>, attributes: AttributesMap) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            ..Self::default()
        }
    }

    /// Create a free-standing text node, tagged [`TEXT_CARRIER_TAG`].
    #[must_use]
    pub fn text_node(text: impl Into<String>) -> Self {
        Self {
            tag: TEXT_CARRIER_TAG.to_string(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Builder: set (or replace) an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: append a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: set the text field.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append `child` as the last child of this node.
    pub fn append_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Set the text field, or extend it with a single separating space if
    /// text is already present.
    pub fn append_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(text);
            }
            slot => *slot = Some(text.to_string()),
        }
    }

    /// Returns true if this node's tag equals `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Returns true if this node is a void element.
    #[must_use]
    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag)
    }

    /// Returns true if this node is a text-bearing element.
    #[must_use]
    pub fn is_text_bearing(&self) -> bool {
        is_text_bearing(&self.tag)
    }

    /// Returns the node's `id` attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").map(String::as_str)
    }

    /// Returns the whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .get("class")
            .map(String::as_str)
            .unwrap_or_default()
            .split_whitespace()
    }

    /// Returns true if `class_name` is one of the node's class tokens.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().any(|c| c == class_name)
    }

    /// Recursive mapping projection of this node.
    ///
    /// Produces `{"tag", "attributes", "children", "text"}` with every child
    /// projected the same way and `text` as `null` when absent. This is the
    /// node's `Serialize` form.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error; a tree of plain strings never fails.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
