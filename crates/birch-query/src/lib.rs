//! Traversal and query engine for the Birch HTML toolkit.
//!
//! # Scope
//!
//! - **Search** - [`Query`] is bound to one root and finds nodes matching a
//!   [`Selector`] in pre-order (node first, then children left to right)
//! - **Traversal** - [`children`], [`descendants`], [`get_text`]
//! - **Views** - [`select`] projects named fields, [`include`] computes
//!   labelled derived values
//! - **Filtering** - [`exclude`] prunes nodes at every depth
//!
//! Every traversal uses an explicit work stack, so deep trees cannot
//! overflow the call stack.

mod filter;
mod projection;
mod selector;
mod traverse;

pub use filter::{exclude, prettify_classes};
pub use projection::{Field, FieldValue, include, select};
pub use selector::Selector;
pub use traverse::{PreOrder, children, descendants, get_text, pre_order};

use birch_dom::Node;

/// Query engine bound to a fixed root.
///
/// All searches walk the tree in pre-order starting at (and including) the
/// root. Zero matches is never an error, and single-match searches silently
/// return the first of several candidates.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    root: &'a Node,
}

impl<'a> Query<'a> {
    /// Bind a query engine to `root`.
    #[must_use]
    pub const fn new(root: &'a Node) -> Self {
        Self { root }
    }

    /// The root this engine searches.
    #[must_use]
    pub const fn root(&self) -> &'a Node {
        self.root
    }

    /// Pre-order iterator over the root and every node below it.
    #[must_use]
    pub fn iter(&self) -> PreOrder<'a> {
        pre_order(self.root)
    }

    /// First node in pre-order matching `selector`.
    #[must_use]
    pub fn find_unique(&self, selector: &Selector<'_>) -> Option<&'a Node> {
        self.iter().find(|node| selector.matches(node))
    }

    /// Same as [`Query::find_unique`].
    #[must_use]
    pub fn find_first(&self, selector: &Selector<'_>) -> Option<&'a Node> {
        self.find_unique(selector)
    }

    /// Every node matching `selector`, in pre-order.
    #[must_use]
    pub fn find_many(&self, selector: &Selector<'_>) -> Vec<&'a Node> {
        self.iter().filter(|node| selector.matches(node)).collect()
    }

    /// Number of nodes matching `selector`.
    #[must_use]
    pub fn count(&self, selector: &Selector<'_>) -> usize {
        self.iter().filter(|node| selector.matches(node)).count()
    }

    /// First node whose `id` attribute equals `id`.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&'a Node> {
        self.find_unique(&Selector::new().attr("id", id))
    }

    /// Every node carrying `class_name` among its class tokens.
    #[must_use]
    pub fn get_by_class(&self, class_name: &str) -> Vec<&'a Node> {
        self.find_many(&Selector::new().class(class_name))
    }

    /// Concatenated text of the whole tree.
    #[must_use]
    pub fn text(&self) -> String {
        get_text(self.root)
    }
}

impl<'a> IntoIterator for Query<'a> {
    type Item = &'a Node;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
