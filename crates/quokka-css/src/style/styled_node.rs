//! Styled nodes and the style tree.
//!
//! [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)

use quokka_common::warning::warn_once;
use quokka_dom::{DomTree, Node, NodeId, NodeType};

use crate::cascade::{PropertyMap, specified_values};
use crate::stylesheet::Stylesheet;
use crate::values::Value;

use super::display::Display;

/// A document node with its specified values.
///
/// The styled tree mirrors the document tree one to one, including text,
/// comment and doctype nodes (which carry an empty map). It is immutable once
/// built and is borrowed by the box tree.
#[derive(Debug, Clone)]
pub struct StyledNode<'a> {
    /// The document node this style belongs to.
    pub node_id: NodeId,
    /// The document node itself.
    pub node: &'a Node,
    /// Cascaded declarations for this node (empty for non-elements).
    pub specified_values: PropertyMap,
    /// Styled children in document order.
    pub children: Vec<StyledNode<'a>>,
}

impl StyledNode<'_> {
    /// Return the specified value of a property if it exists.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.specified_values.get(name)
    }

    /// Return the specified value of property `name`, property
    /// `fallback_name` if that doesn't exist, or `default` if neither does.
    ///
    /// Used for box edges, where `margin-left` falls back to the `margin`
    /// shorthand.
    #[must_use]
    pub fn lookup<'v>(&'v self, name: &str, fallback_name: &str, default: &'v Value) -> &'v Value {
        self.value(name)
            .or_else(|| self.value(fallback_name))
            .unwrap_or(default)
    }

    /// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// The value of the `display` property. Defaults to inline when the
    /// property is missing or not a supported keyword.
    #[must_use]
    pub fn display(&self) -> Display {
        match self.value("display") {
            Some(Value::Keyword(keyword)) => keyword.parse::<Display>().unwrap_or_else(|_| {
                warn_once("CSS", &format!("unsupported display value '{keyword}'"));
                Display::Inline
            }),
            Some(other) => {
                warn_once("CSS", &format!("unsupported display value {other:?}"));
                Display::Inline
            }
            None => Display::Inline,
        }
    }
}

/// Apply a stylesheet to the subtree rooted at `root`, returning the styled
/// tree.
///
/// Elements get their cascaded values; every other node kind gets an empty
/// map. Every child is visited: `display: none` is honoured later, by the box
/// tree builder. Returns None if `root` is not a node of `tree`.
#[must_use]
pub fn style_tree<'a>(tree: &'a DomTree, root: NodeId, stylesheet: &Stylesheet) -> Option<StyledNode<'a>> {
    let node = tree.get(root)?;

    let specified_values = match &node.node_type {
        NodeType::Element(element) => specified_values(element, stylesheet),
        NodeType::Document | NodeType::Doctype(_) | NodeType::Text(_) | NodeType::Comment(_) => {
            PropertyMap::new()
        }
    };

    let children = tree
        .children(root)
        .iter()
        .filter_map(|&child| style_tree(tree, child, stylesheet))
        .collect();

    Some(StyledNode {
        node_id: root,
        node,
        specified_values,
        children,
    })
}
