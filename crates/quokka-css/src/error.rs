//! Errors raised while building or querying the box tree.

use thiserror::Error;

/// Errors from the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The root styled node has `display: none`, so there is nothing to lay out.
    #[error("root node has display: none")]
    RootDisplayNone,
    /// An anonymous block has no styled node of its own.
    #[error("anonymous block box has no styled node")]
    AnonymousBlockStyle,
}
