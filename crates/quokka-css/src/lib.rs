//! Selector matching, cascade, style tree and block layout for the Quokka engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class, ID, and universal selectors in a single compound
//!   - Specificity calculation
//!
//! - **CSS Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Specificity-based ordering, ties broken by source order
//!
//! - **Style Tree**
//!   - One styled node per document node, `display` resolution
//!
//! - **Layout Engine** ([CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html))
//!   - Box tree generation with anonymous blocks
//!   - Normal-flow block width, position and height
//!
//! # Not Yet Implemented
//!
//! - CSS tokenizing and parsing (stylesheets are built as data)
//! - Combinators, pseudo-classes and attribute selectors
//! - Inheritance, `!important`, origins
//! - Inline layout, line boxes, text
//! - Units other than px

/// Render pass configuration.
pub mod config;
/// CSS cascade per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Layout errors.
pub mod error;
/// Box tree and block layout per [CSS 2.1 § 9](https://www.w3.org/TR/CSS2/visuren.html).
pub mod layout;
/// CSS selector parsing and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Styled nodes and the `display` property.
pub mod style;
/// Stylesheet, rule and declaration data model.
pub mod stylesheet;
/// Specified values per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use cascade::{MatchedRule, PropertyMap, matching_rules, specified_values};
pub use config::LayoutConfig;
pub use error::LayoutError;
pub use layout::{BoxType, Dimensions, EdgeSizes, LayoutBox, LengthOrAuto, Rect, layout_tree};
pub use selector::{SimpleSelector, Specificity, matches, parse_selector};
pub use style::{Display, StyledNode, style_tree};
pub use stylesheet::{Declaration, StyleRule, Stylesheet};
pub use values::{ColorValue, Unit, Value};
