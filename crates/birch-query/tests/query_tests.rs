//! Integration tests for the query engine.

use birch_dom::Node;
use birch_html::parse;
use birch_query::{
    Field, FieldValue, Query, Selector, children, descendants, exclude, get_text, include, select,
};

const PAGE: &str = r#"
<html>
  <head>
    <title>Home</title>
    <link rel="stylesheet" href="a.css">
  </head>
  <body class="page">
    <div id="main" class="container wide">
      <h1>Welcome</h1>
      <p class="lead">Hello</p>
      <div class="card">
        <span class="lead">inner</span>
        <link rel="icon" href="i.png">
      </div>
    </div>
    <p>Footer</p>
  </body>
</html>
"#;

/// Helper to parse HTML and unwrap the root
fn page() -> Node {
    parse(PAGE).expect("page parses")
}

/// Helper to list tags in order
fn tags<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Vec<&'a str> {
    nodes.into_iter().map(|n| n.tag.as_str()).collect()
}

// ========== matching ==========

#[test]
fn test_class_count_and_text() {
    let root = parse(r#"<div class="a b"><span>hi</span></div>"#).expect("root");
    let query = Query::new(&root);
    assert_eq!(query.count(&Selector::new().class("a")), 1);
    assert_eq!(query.find_unique(&Selector::new().class("a")).map(|n| n.tag.as_str()), Some("div"));
    assert_eq!(get_text(&root), "hi");
    assert_eq!(query.text(), "hi");
}

#[test]
fn test_find_unique_returns_first_in_pre_order() {
    let root = page();
    let query = Query::new(&root);
    let lead = query.find_unique(&Selector::new().class("lead")).expect("lead");
    assert_eq!(lead.tag, "p");
    assert_eq!(query.find_first(&Selector::new().tag("div")).and_then(Node::id), Some("main"));
}

#[test]
fn test_find_many_in_pre_order() {
    let root = page();
    let query = Query::new(&root);
    let leads = query.find_many(&Selector::new().class("lead"));
    assert_eq!(tags(leads), vec!["p", "span"]);
    assert_eq!(query.count(&Selector::new().tag("link")), 2);
}

#[test]
fn test_empty_selector_matches_every_node() {
    let root = page();
    let query = Query::new(&root);
    let all = query.find_many(&Selector::new());
    assert_eq!(all.len(), query.iter().count());
    assert_eq!(all[0].tag, "html");
}

#[test]
fn test_no_match_is_not_an_error() {
    let root = page();
    let query = Query::new(&root);
    assert!(query.find_unique(&Selector::new().tag("table")).is_none());
    assert!(query.find_many(&Selector::new().class("nope")).is_empty());
    assert_eq!(query.count(&Selector::new().attr("id", "nope")), 0);
}

#[test]
fn test_combined_conditions() {
    let root = page();
    let query = Query::new(&root);
    let selector = Selector::new()
        .tag("link")
        .attr("rel", "icon")
        .matching(|n| n.attributes.contains_key("href"));
    let icon = query.find_unique(&selector).expect("icon link");
    assert_eq!(icon.attributes["href"], "i.png");
}

#[test]
fn test_get_by_id_and_class() {
    let root = page();
    let query = Query::new(&root);
    assert_eq!(query.get_by_id("main").map(|n| n.tag.as_str()), Some("div"));
    assert!(query.get_by_id("missing").is_none());
    assert_eq!(tags(query.get_by_class("wide")), vec!["div"]);
    // "contain" is a prefix, not a class token
    assert!(query.get_by_class("contain").is_empty());
}

// ========== traversal ==========

#[test]
fn test_children_are_shallow() {
    let root = page();
    let query = Query::new(&root);
    let main = query.get_by_id("main").expect("main");
    assert_eq!(tags(children(main)), vec!["h1", "p", "div"]);
    assert!(children(&Node::new("br")).is_empty());
}

#[test]
fn test_descendants_exclude_self() {
    let root = page();
    let query = Query::new(&root);
    let main = query.get_by_id("main").expect("main");
    assert_eq!(
        tags(descendants(main)),
        vec!["h1", "p", "div", "span", "link"]
    );
    assert_eq!(descendants(&Node::new("p")).count(), 0);
}

#[test]
fn test_pre_order_of_whole_tree() {
    let root = page();
    assert_eq!(
        tags(Query::new(&root)),
        vec![
            "html", "head", "title", "link", "body", "div", "h1", "p", "div", "span", "link",
            "p"
        ]
    );
}

#[test]
fn test_text_concatenates_without_separators() {
    let root = page();
    let query = Query::new(&root);
    let main = query.get_by_id("main").expect("main");
    assert_eq!(get_text(main), "WelcomeHelloinner");
    assert_eq!(query.text(), "HomeWelcomeHelloinnerFooter");
}

#[test]
fn test_text_comes_from_leaves_only() {
    let root = parse("<div>hello<span>hi</span></div>").expect("root");
    assert_eq!(root.text.as_deref(), Some("hello"));
    assert_eq!(get_text(&root), "hi");

    let node = Node::new("p").text("a").child(Node::text_node("b"));
    assert_eq!(get_text(&node), "b");
}

#[test]
fn test_text_of_leaf_is_its_own_text() {
    assert_eq!(get_text(&Node::new("p").text("alone")), "alone");
    assert_eq!(get_text(&Node::new("p")), "");
}

// ========== projection ==========

#[test]
fn test_select_known_fields() {
    let node = Node::new("a").attr("href", "/").text("home");
    let fields = select(&node, &["tag", "text", "bogus", "attributes"]);
    let names: Vec<String> = fields.keys().map(ToString::to_string).collect();
    assert_eq!(names, vec!["tag", "text", "attributes"]);
    assert_eq!(fields[&Field::Tag], FieldValue::Tag("a"));
    assert_eq!(fields[&Field::Text], FieldValue::Text(Some("home")));
    assert_eq!(
        serde_json::to_value(fields[&Field::Attributes]).expect("serializes"),
        serde_json::json!({"href": "/"})
    );
    assert_eq!(
        serde_json::to_value(&fields).expect("serializes"),
        serde_json::json!({"tag": "a", "text": "home", "attributes": {"href": "/"}})
    );
}

#[test]
fn test_select_children_projection() {
    let node = Node::new("ul").child(Node::new("li"));
    let fields = select(&node, &[String::from("children")]);
    assert_eq!(
        serde_json::to_value(fields[&Field::Children]).expect("serializes"),
        serde_json::json!([{"tag": "li", "attributes": {}, "children": [], "text": null}])
    );
}

#[test]
fn test_include_relations() {
    let root = page();
    let query = Query::new(&root);
    let main = query.get_by_id("main").expect("main");

    let relations: Vec<(&str, Box<dyn Fn(&Node) -> usize>)> = vec![
        ("children", Box::new(|n: &Node| n.children.len())),
        ("descendants", Box::new(|n: &Node| descendants(n).count())),
    ];
    let view = include(main, relations);
    assert_eq!(view.get("children"), Some(&3));
    assert_eq!(view.get("descendants"), Some(&5));
    let labels: Vec<&str> = view.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["children", "descendants"]);
}

// ========== exclude ==========

#[test]
fn test_exclude_removes_at_every_depth() {
    let root = page();
    let filtered = exclude(vec![root], |n| n.tag == "link");
    assert_eq!(filtered.len(), 1);
    let query = Query::new(&filtered[0]);
    assert_eq!(query.count(&Selector::new().tag("link")), 0);
    assert_eq!(
        tags(query),
        vec!["html", "head", "title", "body", "div", "h1", "p", "div", "span", "p"]
    );
}

#[test]
fn test_exclude_preserves_sibling_order() {
    let nodes = vec![
        Node::new("a"),
        Node::new("link"),
        Node::new("b")
            .child(Node::new("x"))
            .child(Node::new("link"))
            .child(Node::new("y"))
            .child(Node::new("link"))
            .child(Node::new("z")),
        Node::new("link").child(Node::new("c")),
    ];
    let kept = exclude(nodes, |n| n.has_tag("link"));
    assert_eq!(tags(&kept), vec!["a", "b"]);
    assert_eq!(tags(&kept[1].children), vec!["x", "y", "z"]);
}

#[test]
fn test_exclude_removes_whole_subtree() {
    let root = page();
    let filtered = exclude(vec![root], |n| n.id() == Some("main"));
    let query = Query::new(&filtered[0]);
    assert!(query.get_by_id("main").is_none());
    assert_eq!(query.count(&Selector::new().class("lead")), 0);
    assert_eq!(query.text(), "HomeFooter");
}

#[test]
fn test_exclude_nothing_keeps_tree() {
    let root = page();
    let filtered = exclude(vec![root.clone()], |_| false);
    assert_eq!(filtered, vec![root]);
}
