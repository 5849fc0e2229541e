use birch_dom::Node;

/// Drop every node for which `remove` returns true, at every depth.
///
/// Returns the retained top-level nodes in their original order. Each
/// retained node has its `children` replaced, in place, by the filtered list
/// of its own children. `remove` sees a node before its children are
/// filtered.
#[must_use]
pub fn exclude<F>(nodes: Vec<Node>, remove: F) -> Vec<Node>
where
    F: Fn(&Node) -> bool,
{
    let mut kept = nodes;
    kept.retain(|node| !remove(node));

    let mut pending: Vec<&mut Node> = kept.iter_mut().collect();
    while let Some(node) = pending.pop() {
        node.children.retain(|child| !remove(child));
        pending.extend(node.children.iter_mut());
    }

    kept
}

/// Collapse long `class` attributes for display.
///
/// Any `class` value of at least `max_len` characters is replaced by `...`;
/// shorter values are left as they are. Only the given nodes are touched,
/// not their children.
pub fn prettify_classes(nodes: &mut [Node], max_len: usize) {
    for node in nodes {
        let Some(class) = node.attributes.get_mut("class") else {
            continue;
        };
        if class.chars().count() >= max_len {
            "...".clone_into(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_classes() {
        let mut nodes = vec![
            Node::new("div").attr("class", "container fluid"),
            Node::new("div").attr("class", "exactly8"),
            Node::new("div").attr("class", "short"),
            Node::new("div"),
        ];
        prettify_classes(&mut nodes, 8);
        assert_eq!(nodes[0].attributes["class"], "...");
        assert_eq!(nodes[1].attributes["class"], "...");
        assert_eq!(nodes[2].attributes["class"], "short");
        assert!(nodes[3].attributes.is_empty());
    }
}
