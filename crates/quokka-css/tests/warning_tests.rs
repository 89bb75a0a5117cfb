//! Warning bookkeeping across layout passes.
//!
//! Kept in its own test binary: `layout_tree` resets the process-wide
//! warning set, which would race with warning checks in other tests.

use quokka_common::warning::{warn_once, was_warned};
use quokka_css::{
    Declaration, LayoutConfig, SimpleSelector, StyleRule, Stylesheet, Value, layout_tree,
    style_tree,
};
use quokka_dom::{AttributesMap, DomTree, ElementData, NodeId};

#[test]
fn test_each_layout_pass_starts_with_fresh_warnings() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, ElementData::new("div", AttributesMap::new()));
    let _ = tree.append_element(div, ElementData::new("p", AttributesMap::new()));

    let sheet = Stylesheet::new(vec![
        StyleRule::new(
            vec![SimpleSelector::tag("div")],
            vec![Declaration::new("display", Value::keyword("block"))],
        ),
        StyleRule::new(
            vec![SimpleSelector::tag("p")],
            vec![Declaration::new("display", Value::keyword("flex"))],
        ),
    ]);
    let styled = style_tree(&tree, div, &sheet).unwrap();

    // A warning left over from earlier work is dropped by the next pass.
    warn_once("Test", "stale message");
    assert!(was_warned("Test", "stale message"));

    let _ = layout_tree(&styled, &LayoutConfig::default()).unwrap();
    assert!(!was_warned("Test", "stale message"));
    assert!(was_warned("CSS", "unsupported display value 'flex'"));

    // The same unsupported input is reported again on the next pass.
    let _ = layout_tree(&styled, &LayoutConfig::default()).unwrap();
    assert!(was_warned("CSS", "unsupported display value 'flex'"));
}
