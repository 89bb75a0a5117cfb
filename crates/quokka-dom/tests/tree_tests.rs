//! Tests for document tree construction and element attribute helpers.

use quokka_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag, AttributesMap::new())))
}

#[test]
fn test_new_tree_has_only_document() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert!(matches!(
        tree.get(tree.root()).map(|n| &n.node_type),
        Some(NodeType::Document)
    ));
}

#[test]
fn test_append_child_preserves_document_order() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.parent(b), Some(parent));
    assert_eq!(tree.parent(parent), Some(NodeId::ROOT));
}

#[test]
fn test_append_helpers() {
    let mut tree = DomTree::new();
    let body = tree.append_element(NodeId::ROOT, ElementData::new("body", AttributesMap::new()));
    let text = tree.append_text(body, "Hello");

    assert_eq!(tree.as_element(body).map(|e| e.tag_name.as_str()), Some("body"));
    assert_eq!(tree.as_text(text), Some("Hello"));
    assert_eq!(tree.as_element(text).map(|e| e.tag_name.as_str()), None);
}

#[test]
fn test_other_node_kinds() {
    let mut tree = DomTree::new();
    let doctype = tree.alloc(NodeType::Doctype("html".to_string()));
    let comment = tree.alloc(NodeType::Comment("note".to_string()));
    tree.append_child(NodeId::ROOT, doctype);
    tree.append_child(NodeId::ROOT, comment);

    assert_eq!(tree.children(NodeId::ROOT), &[doctype, comment]);
    assert!(tree.as_element(doctype).is_none());
    assert!(tree.as_text(comment).is_none());
}

#[test]
fn test_element_id_and_classes() {
    let mut attrs = AttributesMap::new();
    let _ = attrs.insert("id".to_string(), "main".to_string());
    let _ = attrs.insert("class".to_string(), "note wide".to_string());
    let element = ElementData::new("div", attrs);

    assert_eq!(element.id(), Some("main"));
    let classes = element.classes();
    assert!(classes.contains("note"));
    assert!(classes.contains("wide"));
    assert!(!classes.contains("narrow"));
}

#[test]
fn test_children_of_unknown_node_is_empty() {
    let tree = DomTree::new();
    assert!(tree.children(NodeId(7)).is_empty());
    assert_eq!(tree.parent(NodeId(7)), None);
}
