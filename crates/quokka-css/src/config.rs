//! Render pass configuration.

use serde::{Deserialize, Serialize};

use crate::layout::{Dimensions, Rect};

/// Viewport settings for a layout pass.
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width in pixels; the root block's containing width.
    pub viewport_width: f32,
    /// Viewport height in pixels. Not used by block flow.
    pub viewport_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }
}

impl LayoutConfig {
    /// Create a configuration for a viewport of the given size.
    #[must_use]
    pub const fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
        }
    }

    /// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// "The containing block in which the root element lives is a rectangle
    /// called the initial containing block."
    ///
    /// Only the width constrains the root; the content height is zero.
    #[must_use]
    pub fn initial_containing_block(&self) -> Dimensions {
        Dimensions {
            content: Rect {
                x: 0.0,
                y: 0.0,
                width: self.viewport_width,
                height: 0.0,
            },
            ..Dimensions::default()
        }
    }

    /// The full viewport rectangle.
    #[must_use]
    pub const fn viewport(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_containing_block_has_no_height() {
        let config = LayoutConfig::new(1024.0, 768.0);
        let icb = config.initial_containing_block();
        assert_eq!(icb.content.width, 1024.0);
        assert_eq!(icb.content.height, 0.0);
        assert_eq!(config.viewport().height, 768.0);
    }
}
