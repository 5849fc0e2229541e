//! Tests for the node model: classification, text joining and projection.

use birch_dom::{
    AttributesMap, Node, TEXT_CARRIER_TAG, VOID_ELEMENTS, is_text_bearing, is_void_element,
};
use serde_json::json;

// ========== classification ==========

#[test]
fn test_void_elements() {
    for tag in VOID_ELEMENTS {
        assert!(is_void_element(tag), "{tag} should be void");
        assert!(Node::new(tag).is_void());
    }
    assert!(!is_void_element("div"));
    assert!(!is_void_element("BR"));
}

#[test]
fn test_text_bearing_elements() {
    for tag in ["title", "p", "h1", "h6", "span", "a", "div", "body"] {
        assert!(is_text_bearing(tag), "{tag} should be text-bearing");
    }
    for tag in ["ul", "li", "head", "html", "section", "br"] {
        assert!(!is_text_bearing(tag), "{tag} should not be text-bearing");
    }
}

#[test]
fn test_text_node_uses_carrier_tag() {
    let node = Node::text_node("hello");
    assert_eq!(node.tag, TEXT_CARRIER_TAG);
    assert_eq!(node.text.as_deref(), Some("hello"));
    assert!(node.children.is_empty());
}

// ========== attributes ==========

#[test]
fn test_id_and_classes() {
    let node = Node::new("div").attr("id", "main").attr("class", "  a   b\tc ");
    assert_eq!(node.id(), Some("main"));
    assert_eq!(node.classes().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert!(node.has_class("b"));
    assert!(!node.has_class("d"));
    assert!(!node.has_class(""));
}

#[test]
fn test_missing_class_attribute_has_no_classes() {
    let node = Node::new("p");
    assert_eq!(node.id(), None);
    assert_eq!(node.classes().count(), 0);
}

#[test]
fn test_attribute_reinsert_keeps_position_and_takes_last_value() {
    let mut attrs = AttributesMap::new();
    let _ = attrs.insert("id".to_string(), "x".to_string());
    let _ = attrs.insert("class".to_string(), "c".to_string());
    let _ = attrs.insert("id".to_string(), "y".to_string());

    let node = Node::with_attributes("a", attrs);
    let keys: Vec<&str> = node.attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "class"]);
    assert_eq!(node.id(), Some("y"));
}

// ========== text ==========

#[test]
fn test_append_text_joins_with_single_space() {
    let mut node = Node::new("p");
    node.append_text("hello");
    node.append_text("world");
    assert_eq!(node.text.as_deref(), Some("hello world"));
}

#[test]
fn test_append_text_replaces_empty_text() {
    let mut node = Node::new("p").text("");
    node.append_text("hello");
    assert_eq!(node.text.as_deref(), Some("hello"));
}

// ========== projection ==========

#[test]
fn test_to_value_projection() {
    let node = Node::new("div")
        .attr("class", "box")
        .child(Node::new("span").text("hi"))
        .child(Node::new("br"));

    assert_eq!(
        node.to_value().expect("projection"),
        json!({
            "tag": "div",
            "attributes": {"class": "box"},
            "children": [
                {"tag": "span", "attributes": {}, "children": [], "text": "hi"},
                {"tag": "br", "attributes": {}, "children": [], "text": null},
            ],
            "text": null,
        })
    );
}

#[test]
fn test_projection_key_order() {
    let node = Node::new("p").text("x");
    let value = node.to_value().expect("projection");
    let keys: Vec<&String> = value.as_object().map(|o| o.keys().collect()).unwrap_or_default();
    assert_eq!(keys, vec!["tag", "attributes", "children", "text"]);
}

#[test]
fn test_serialized_text_keeps_field_order() {
    let node = Node::new("ul").child(Node::new("li").attr("id", "first"));
    let text = serde_json::to_string(&node).expect("node serializes");
    assert_eq!(
        text,
        r#"{"tag":"ul","attributes":{},"children":[{"tag":"li","attributes":{"id":"first"},"children":[],"text":null}],"text":null}"#
    );
}
