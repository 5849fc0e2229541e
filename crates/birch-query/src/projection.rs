use indexmap::IndexMap;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use birch_dom::{AttributesMap, Node};

/// A named field of [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// `tag`
    Tag,
    /// `attributes`
    Attributes,
    /// `children`
    Children,
    /// `text`
    Text,
}

impl Field {
    /// Borrow this field from `node`.
    #[must_use]
    pub fn of(self, node: &Node) -> FieldValue<'_> {
        match self {
            Self::Tag => FieldValue::Tag(&node.tag),
            Self::Attributes => FieldValue::Attributes(&node.attributes),
            Self::Children => FieldValue::Children(&node.children),
            Self::Text => FieldValue::Text(node.text.as_deref()),
        }
    }
}

/// A borrowed field value, as returned by [`select`].
///
/// Serializes as the bare value, so a [`select`] result serializes to a
/// mapping with the same shape as the node's own projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    /// The tag name.
    Tag(&'a str),
    /// The attribute list.
    Attributes(&'a AttributesMap),
    /// The child list.
    Children(&'a [Node]),
    /// The text, if any.
    Text(Option<&'a str>),
}

/// Pick the named fields of `node`.
///
/// Names that are not fields of [`Node`] are skipped. The result keeps the
/// order in which fields were first requested.
#[must_use]
pub fn select<'a, S: AsRef<str>>(node: &'a Node, fields: &[S]) -> IndexMap<Field, FieldValue<'a>> {
    fields
        .iter()
        .filter_map(|name| name.as_ref().parse::<Field>().ok())
        .map(|field| (field, field.of(node)))
        .collect()
}

/// Apply each labelled function to `node`.
///
/// A generic hook for derived views, e.g. a child count or the extracted
/// text, keyed by label in the order given.
#[must_use]
pub fn include<K, T, F, I>(node: &Node, relations: I) -> IndexMap<String, T>
where
    I: IntoIterator<Item = (K, F)>,
    K: Into<String>,
    F: Fn(&Node) -> T,
{
    relations
        .into_iter()
        .map(|(label, relation)| (label.into(), relation(node)))
        .collect()
}
