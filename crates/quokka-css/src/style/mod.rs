//! Style tree construction
//!
//! This module turns a document tree into a parallel tree of styled nodes per:
//! - [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/)
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)

mod display;
mod styled_node;

pub use display::Display;
pub use styled_node::{StyledNode, style_tree};
