//! CSS Layout Engine
//!
//! This module implements normal-flow block layout for the box tree.
//!
//! # Relevant Specifications
//!
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`values`] - Auto-or-length values for width resolution
//! - [`layout_box`] - Box tree construction and the block layout algorithm

pub mod box_model;
pub mod layout_box;
pub mod values;

// Re-exports for convenience
pub use box_model::{Dimensions, EdgeSizes, Rect};
pub use layout_box::{BoxType, LayoutBox, UsedWidths, layout_tree, resolve_block_width};
pub use values::LengthOrAuto;
