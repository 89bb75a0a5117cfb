//! CSS Display property
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)

use serde::Serialize;
use strum_macros::{Display as DisplayName, EnumString};

/// The subset of `display` the box tree builder understands.
///
/// Parsed from the keyword with [`std::str::FromStr`]; anything other than
/// `block`, `inline` or `none` fails to parse and is treated as inline by
/// [`crate::style::StyledNode::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, DisplayName)]
#[strum(serialize_all = "lowercase")]
pub enum Display {
    /// [§ 2.1](https://www.w3.org/TR/css-display-3/#outer-role)
    /// "The element generates a block-level box when placed in flow layout."
    Block,
    /// "The element generates an inline-level box when placed in flow layout."
    Inline,
    /// [§ 2.6](https://www.w3.org/TR/css-display-3/#valdef-display-none)
    /// "The element and its descendants generate no boxes or text runs."
    None,
}

impl Default for Display {
    /// [§ 2](https://www.w3.org/TR/css-display-3/#the-display-properties)
    /// "Initial: inline"
    fn default() -> Self {
        Self::Inline
    }
}
