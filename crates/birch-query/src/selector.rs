use core::fmt;

use birch_dom::Node;

/// Conjunction of optional match conditions.
///
/// A node matches when it satisfies every condition that was set:
/// - a custom predicate ([`Selector::matching`])
/// - tag equality ([`Selector::tag`])
/// - attribute equality, one entry per [`Selector::attr`] call
/// - class token membership ([`Selector::class`])
///
/// An empty selector matches every node. Empty tag or class strings impose
/// no condition.
#[derive(Default)]
pub struct Selector<'p> {
    predicate: Option<Box<dyn Fn(&Node) -> bool + 'p>>,
    tag: Option<String>,
    attributes: Vec<(String, String)>,
    class_name: Option<String>,
}

impl<'p> Selector<'p> {
    /// A selector that matches every node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `predicate` to hold.
    #[must_use]
    pub fn matching(mut self, predicate: impl Fn(&Node) -> bool + 'p) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Require the tag to equal `tag`.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into()).filter(|t| !t.is_empty());
        self
    }

    /// Require attribute `name` to equal `value`.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Require `class_name` among the node's whitespace-separated classes.
    #[must_use]
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into()).filter(|c| !c.is_empty());
        self
    }

    /// Returns true if `node` satisfies every condition.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        if !self.predicate.as_ref().is_none_or(|predicate| predicate(node)) {
            return false;
        }
        if !self.tag.as_ref().is_none_or(|tag| node.tag == *tag) {
            return false;
        }
        let attributes_match = self
            .attributes
            .iter()
            .all(|(name, value)| node.attributes.get(name) == Some(value));
        if !attributes_match {
            return false;
        }
        self.class_name
            .as_deref()
            .is_none_or(|class_name| node.has_class(class_name))
    }
}

impl fmt::Debug for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("predicate", &self.predicate.as_ref().map(|_| ".."))
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("class_name", &self.class_name)
            .finish()
    }
}
