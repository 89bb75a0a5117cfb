//! Auto-or-length values used during width resolution.

use crate::values::{Unit, Value};

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
///
/// Only `width` and the horizontal margins keep `auto` distinct from a length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthOrAuto {
    /// The value is 'auto' and must be resolved during layout.
    Auto,
    /// The value is a specific length in pixels.
    Px(f32),
}

impl Default for LengthOrAuto {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl From<&Value> for LengthOrAuto {
    /// `auto` stays auto, pixel lengths keep their value, anything else
    /// counts as zero.
    fn from(value: &Value) -> Self {
        match value {
            Value::Keyword(_) if value.is_auto() => Self::Auto,
            Value::Length(px, Unit::Px) => Self::Px(*px),
            Value::Keyword(_) | Value::Color(_) => Self::Px(0.0),
        }
    }
}

impl LengthOrAuto {
    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Get the length value, or a default if 'auto'.
    #[must_use]
    pub const fn to_px_or(self, default: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Auto => default,
        }
    }

    /// The length, with 'auto' counting as zero.
    #[must_use]
    pub const fn px_or_zero(self) -> f32 {
        self.to_px_or(0.0)
    }
}
