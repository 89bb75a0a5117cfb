//! Specified values carried by declarations.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! The value model is deliberately small: a keyword, a pixel length, or an
//! RGBA color. Anything else is the parser's problem.

use serde::Serialize;

/// [§ 3 Textual data types](https://www.w3.org/TR/css-values-4/#textual-values)
///
/// The keyword that leaves a value to be computed during layout.
pub const AUTO: &str = "auto";

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Only absolute pixels are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
}

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };

    /// White (#ffffff)
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };

    /// Build a color from its four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A specified value as written in a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// An identifier such as `auto`, `block` or `none`.
    Keyword(String),
    /// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
    Length(f32, Unit),
    /// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
    Color(ColorValue),
}

impl Value {
    /// The `auto` keyword.
    #[must_use]
    pub fn auto() -> Self {
        Self::Keyword(AUTO.to_string())
    }

    /// A pixel length.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self::Length(value, Unit::Px)
    }

    /// An arbitrary keyword.
    #[must_use]
    pub fn keyword(keyword: &str) -> Self {
        Self::Keyword(keyword.to_string())
    }

    /// Whether this is the `auto` keyword.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Keyword(keyword) if keyword == AUTO)
    }

    /// Pixel value of a length; every other value counts as zero.
    #[must_use]
    pub fn to_px(&self) -> f32 {
        match self {
            Self::Length(value, Unit::Px) => *value,
            Self::Keyword(_) | Self::Color(_) => 0.0,
        }
    }
}
