use birch_dom::Node;

/// Depth-first pre-order iterator.
///
/// Yields a node before any of its descendants, then its children left to
/// right. Pending nodes live on an explicit stack.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost child is popped first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Pre-order iterator over `node` and everything below it.
#[must_use]
pub fn pre_order(node: &Node) -> PreOrder<'_> {
    PreOrder { stack: vec![node] }
}

/// Direct children of `node`, in order.
#[must_use]
pub fn children(node: &Node) -> &[Node] {
    &node.children
}

/// Every node strictly below `node`, in pre-order.
#[must_use]
pub fn descendants(node: &Node) -> PreOrder<'_> {
    PreOrder {
        stack: node.children.iter().rev().collect(),
    }
}

/// Concatenate the `text` values of every leaf in the subtree, in pre-order
/// and with no separators.
///
/// A node with children contributes only through its leaves, so text held
/// directly by a parent element is not part of the result.
#[must_use]
pub fn get_text(node: &Node) -> String {
    pre_order(node)
        .filter(|n| n.children.is_empty())
        .filter_map(|n| n.text.as_deref())
        .collect()
}
