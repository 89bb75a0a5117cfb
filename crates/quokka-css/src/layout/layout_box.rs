//! Box tree construction and block layout.
//!
//! [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! [CSS 2.1 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html)

use quokka_common::warning::clear_warnings;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::style::{Display, StyledNode};
use crate::values::{Unit, Value};

use super::box_model::Dimensions;
use super::values::LengthOrAuto;

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// "The following sections describe the types of boxes that may be generated
/// in CSS 2.1. A box's type affects, in part, its behavior in the visual
/// formatting model."
#[derive(Debug, Clone, Copy)]
pub enum BoxType<'a> {
    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    BlockNode(&'a StyledNode<'a>),

    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    InlineNode(&'a StyledNode<'a>),

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "In a document like this: `<div>`Some text`<p>`More text`</p></div>`
    /// ...the 'Some text' part generates an anonymous block box."
    ///
    /// Wraps consecutive inline children of a block box.
    AnonymousBlock,
}

/// A node in the box tree.
///
/// "Each box is associated with its generating element." Anonymous blocks are
/// the exception and have no styled node.
#[derive(Debug, Clone)]
pub struct LayoutBox<'a> {
    /// Used geometry, filled in by [`LayoutBox::layout`].
    pub dimensions: Dimensions,
    /// What generated this box.
    pub box_type: BoxType<'a>,
    /// Child boxes in document order.
    pub children: Vec<LayoutBox<'a>>,
}

/// Used values produced by the block width constraint equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsedWidths {
    /// Content width.
    pub width: f32,
    /// Left margin.
    pub margin_left: f32,
    /// Right margin.
    pub margin_right: f32,
}

/// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
///
/// "The following constraints must hold among the used values of the other
/// properties:
///
///   'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
///   'padding-right' + 'border-right-width' + 'margin-right'
///   = width of containing block"
///
/// `fixed_edges` is the sum of the horizontal borders and paddings, which are
/// never auto. The returned values always satisfy the equation exactly.
#[must_use]
pub fn resolve_block_width(
    containing_width: f32,
    width: LengthOrAuto,
    margin_left: LengthOrAuto,
    margin_right: LengthOrAuto,
    fixed_edges: f32,
) -> UsedWidths {
    let mut margin_left = margin_left;
    let mut margin_right = margin_right;

    let total = margin_left.px_or_zero() + fixed_edges + width.px_or_zero() + margin_right.px_or_zero();

    // "If 'width' is not 'auto' and 'border-left-width' + 'padding-left' +
    // 'width' + 'padding-right' + 'border-right-width' (plus any of
    // 'margin-left' or 'margin-right' that are not 'auto') is larger than
    // the width of the containing block, then any 'auto' values for
    // 'margin-left' or 'margin-right' are, for the following rules,
    // treated as zero."
    if !width.is_auto() && total > containing_width {
        if margin_left.is_auto() {
            margin_left = LengthOrAuto::Px(0.0);
        }
        if margin_right.is_auto() {
            margin_right = LengthOrAuto::Px(0.0);
        }
    }

    let underflow = containing_width - total;

    let (width, margin_left, margin_right) = match (width, margin_left, margin_right) {
        // "If all of the above have a computed value other than 'auto', the
        // values are said to be 'over-constrained'... the specified value of
        // 'margin-right' is ignored and the value is calculated so as to make
        // the equality true."
        (LengthOrAuto::Px(width), LengthOrAuto::Px(left), LengthOrAuto::Px(right)) => {
            (width, left, right + underflow)
        }

        // "If there is exactly one value specified as 'auto', its used value
        // follows from the equality."
        (LengthOrAuto::Px(width), LengthOrAuto::Px(left), LengthOrAuto::Auto) => (width, left, underflow),
        (LengthOrAuto::Px(width), LengthOrAuto::Auto, LengthOrAuto::Px(right)) => (width, underflow, right),

        // "If both 'margin-left' and 'margin-right' are 'auto', their used
        // values are equal. This horizontally centers the element with
        // respect to the edges of the containing block."
        (LengthOrAuto::Px(width), LengthOrAuto::Auto, LengthOrAuto::Auto) => {
            (width, underflow / 2.0, underflow / 2.0)
        }

        // "If 'width' is set to 'auto', any other 'auto' values become '0'
        // and 'width' follows from the resulting equality."
        //
        // Width cannot go negative; the right margin absorbs the overflow.
        (LengthOrAuto::Auto, left, right) => {
            let (left, right) = (left.px_or_zero(), right.px_or_zero());
            if underflow >= 0.0 {
                (underflow, left, right)
            } else {
                (0.0, left, right + underflow)
            }
        }
    };

    UsedWidths {
        width,
        margin_left,
        margin_right,
    }
}

impl<'a> LayoutBox<'a> {
    /// Create a box with no children and zeroed geometry.
    #[must_use]
    pub fn new(box_type: BoxType<'a>) -> Self {
        Self {
            dimensions: Dimensions::default(),
            box_type,
            children: Vec::new(),
        }
    }

    /// The styled node that generated this box.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::AnonymousBlockStyle`] for anonymous blocks.
    pub const fn styled_node(&self) -> Result<&'a StyledNode<'a>, LayoutError> {
        match self.box_type {
            BoxType::BlockNode(node) | BoxType::InlineNode(node) => Ok(node),
            BoxType::AnonymousBlock => Err(LayoutError::AnonymousBlockStyle),
        }
    }

    /// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
    ///
    /// Build the box tree for a styled tree.
    ///
    /// The root becomes a block or inline box according to its `display`.
    /// Children with `display: none` are dropped together with their whole
    /// subtree.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::RootDisplayNone`] if the root itself has
    /// `display: none`.
    pub fn build_layout_tree(style_node: &'a StyledNode<'a>) -> Result<Self, LayoutError> {
        let box_type = match style_node.display() {
            Display::Block => BoxType::BlockNode(style_node),
            Display::Inline => BoxType::InlineNode(style_node),
            Display::None => return Err(LayoutError::RootDisplayNone),
        };
        Ok(Self::build_box(style_node, box_type))
    }

    fn build_box(style_node: &'a StyledNode<'a>, box_type: BoxType<'a>) -> Self {
        let mut root = Self::new(box_type);

        for child in &style_node.children {
            match child.display() {
                Display::Block => root
                    .children
                    .push(Self::build_box(child, BoxType::BlockNode(child))),
                Display::Inline => root.push_inline_child(Self::build_box(child, BoxType::InlineNode(child))),
                // [§ 2.5 Box Generation](https://www.w3.org/TR/css-display-3/#box-generation)
                // "The element and its descendants generate no boxes or text
                // runs."
                Display::None => {
                    log::debug!(target: "quokka", "dropping display:none subtree at {:?}", child.node_id);
                }
            }
        }

        root
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "if a block container box has a block-level box inside it, then we
    /// force it to have only block-level boxes inside it."
    ///
    /// Append an inline child. Inline and anonymous boxes take it directly;
    /// a block box puts it in its trailing anonymous block, opening a new one
    /// if the last child is not anonymous.
    fn push_inline_child(&mut self, child: Self) {
        if matches!(self.box_type, BoxType::InlineNode(_) | BoxType::AnonymousBlock) {
            self.children.push(child);
            return;
        }

        let reuse_last = matches!(
            self.children.last(),
            Some(Self {
                box_type: BoxType::AnonymousBlock,
                ..
            })
        );
        if !reuse_last {
            self.children.push(Self::new(BoxType::AnonymousBlock));
        }
        if let Some(anonymous) = self.children.last_mut() {
            anonymous.children.push(child);
        }
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// Lay out this box and its descendants inside `containing_block`.
    ///
    /// The box is positioned from the containing block's content origin.
    /// Only block boxes are laid out. Inline and anonymous boxes keep zeroed
    /// geometry.
    pub fn layout(&mut self, containing_block: &Dimensions) {
        match self.box_type {
            BoxType::BlockNode(style) => self.layout_block(style, containing_block),
            BoxType::InlineNode(_) | BoxType::AnonymousBlock => {}
        }
    }

    fn layout_block(&mut self, style: &StyledNode<'_>, containing_block: &Dimensions) {
        // Width depends on the parent, height on the children, so the order
        // is fixed: width, position, children, height.
        self.calculate_block_width(style, containing_block);
        self.calculate_block_position(style, containing_block);
        self.layout_block_children();
        self.calculate_block_height(style);

        log::trace!(
            target: "quokka",
            "laid out block {:?}: {:?}",
            style.node_id,
            self.dimensions.content
        );
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// Resolve the horizontal box model values and the used width.
    fn calculate_block_width(&mut self, style: &StyledNode<'_>, containing_block: &Dimensions) {
        let zero = Value::px(0.0);

        // A missing width is auto.
        let width = style.value("width").map_or(LengthOrAuto::Auto, LengthOrAuto::from);
        let margin_left = LengthOrAuto::from(style.lookup("margin-left", "margin", &zero));
        let margin_right = LengthOrAuto::from(style.lookup("margin-right", "margin", &zero));

        let border_left = style.lookup("border-left-width", "border-width", &zero).to_px();
        let border_right = style.lookup("border-right-width", "border-width", &zero).to_px();
        let padding_left = style.lookup("padding-left", "padding", &zero).to_px();
        let padding_right = style.lookup("padding-right", "padding", &zero).to_px();

        let used = resolve_block_width(
            containing_block.content.width,
            width,
            margin_left,
            margin_right,
            border_left + border_right + padding_left + padding_right,
        );

        let d = &mut self.dimensions;
        d.content.width = used.width;
        d.margin.left = used.margin_left;
        d.margin.right = used.margin_right;
        d.border.left = border_left;
        d.border.right = border_right;
        d.padding.left = padding_left;
        d.padding.right = padding_right;
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "Each box's left outer edge touches the left edge of the containing
    /// block."
    ///
    /// Both coordinates are offsets from the containing block's content
    /// origin; earlier siblings do not move this box down.
    fn calculate_block_position(&mut self, style: &StyledNode<'_>, containing_block: &Dimensions) {
        let zero = Value::px(0.0);
        let d = &mut self.dimensions;

        d.margin.top = style.lookup("margin-top", "margin", &zero).to_px();
        d.margin.bottom = style.lookup("margin-bottom", "margin", &zero).to_px();
        d.border.top = style.lookup("border-top-width", "border-width", &zero).to_px();
        d.border.bottom = style.lookup("border-bottom-width", "border-width", &zero).to_px();
        d.padding.top = style.lookup("padding-top", "padding", &zero).to_px();
        d.padding.bottom = style.lookup("padding-bottom", "padding", &zero).to_px();

        d.content.x = containing_block.content.x + d.margin.left + d.border.left + d.padding.left;

        d.content.y = containing_block.content.y + d.margin.top + d.border.top + d.padding.top;
    }

    /// Lay out children top to bottom, growing the content height by each
    /// child's margin box.
    fn layout_block_children(&mut self) {
        let Self {
            dimensions,
            children,
            ..
        } = self;

        // Start from zero so laying out the same tree again gives the same height.
        dimensions.content.height = 0.0;
        for child in children.iter_mut() {
            child.layout(dimensions);
            dimensions.content.height += child.dimensions.margin_box().height;
        }
    }

    /// [§ 10.6.3 Block-level non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// An explicit pixel height wins over the content height. Children keep
    /// the positions they already have.
    fn calculate_block_height(&mut self, style: &StyledNode<'_>) {
        if let Some(&Value::Length(height, Unit::Px)) = style.value("height") {
            self.dimensions.content.height = height;
        }
    }
}

/// Build the box tree for `styled_root` and lay it out against the initial
/// containing block of `config`.
///
/// Each pass starts with an empty warning set, so unsupported input is
/// reported once per pass.
///
/// # Errors
///
/// Returns [`LayoutError::RootDisplayNone`] if the root has `display: none`.
pub fn layout_tree<'a>(
    styled_root: &'a StyledNode<'a>,
    config: &LayoutConfig,
) -> Result<LayoutBox<'a>, LayoutError> {
    log::debug!(
        target: "quokka",
        "layout pass for {:?} at {}x{}",
        styled_root.node_id,
        config.viewport_width,
        config.viewport_height
    );

    clear_warnings();

    let mut root = LayoutBox::build_layout_tree(styled_root)?;
    root.layout(&config.initial_containing_block());
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::values::LengthOrAuto::{Auto, Px};
    use crate::style::style_tree;
    use crate::stylesheet::Stylesheet;
    use quokka_dom::{DomTree, NodeId};

    fn sum(used: UsedWidths, fixed_edges: f32) -> f32 {
        used.margin_left + used.width + used.margin_right + fixed_edges
    }

    #[test]
    fn test_both_margins_auto_center() {
        let used = resolve_block_width(100.0, Px(50.0), Auto, Auto, 0.0);
        assert_eq!(used.margin_left, 25.0);
        assert_eq!(used.margin_right, 25.0);
        assert_eq!(used.width, 50.0);
    }

    #[test]
    fn test_single_auto_margin_takes_the_rest() {
        let used = resolve_block_width(100.0, Px(50.0), Px(10.0), Auto, 4.0);
        assert_eq!(used.margin_right, 36.0);

        let used = resolve_block_width(100.0, Px(50.0), Auto, Px(10.0), 4.0);
        assert_eq!(used.margin_left, 36.0);
    }

    #[test]
    fn test_over_constrained_adjusts_margin_right() {
        let used = resolve_block_width(100.0, Px(80.0), Px(30.0), Px(0.0), 0.0);
        assert_eq!(used.margin_left, 30.0);
        assert_eq!(used.margin_right, -10.0);
    }

    #[test]
    fn test_too_wide_box_zeroes_auto_margins() {
        let used = resolve_block_width(100.0, Px(120.0), Auto, Auto, 0.0);
        assert_eq!(used.margin_left, 0.0);
        assert_eq!(used.margin_right, -20.0);
        assert_eq!(sum(used, 0.0), 100.0);
    }

    #[test]
    fn test_auto_width_fills_or_clamps() {
        let used = resolve_block_width(100.0, Auto, Auto, Px(10.0), 20.0);
        assert_eq!(used.margin_left, 0.0);
        assert_eq!(used.width, 70.0);

        let used = resolve_block_width(100.0, Auto, Px(60.0), Px(0.0), 60.0);
        assert_eq!(used.width, 0.0);
        assert_eq!(used.margin_right, -20.0);
        assert_eq!(sum(used, 60.0), 100.0);
    }

    #[test]
    fn test_anonymous_block_has_no_styled_node() {
        let anonymous = LayoutBox::new(BoxType::AnonymousBlock);
        assert_eq!(
            anonymous.styled_node().err(),
            Some(LayoutError::AnonymousBlockStyle)
        );
    }

    #[test]
    fn test_inline_children_share_trailing_anonymous_block() {
        let tree = DomTree::new();
        let styled = style_tree(&tree, NodeId::ROOT, &Stylesheet::default()).unwrap();

        let mut block = LayoutBox::new(BoxType::BlockNode(&styled));
        block.push_inline_child(LayoutBox::new(BoxType::InlineNode(&styled)));
        block.push_inline_child(LayoutBox::new(BoxType::InlineNode(&styled)));
        assert_eq!(block.children.len(), 1);
        assert!(matches!(block.children[0].box_type, BoxType::AnonymousBlock));
        assert_eq!(block.children[0].children.len(), 2);

        block.children.push(LayoutBox::new(BoxType::BlockNode(&styled)));
        block.push_inline_child(LayoutBox::new(BoxType::InlineNode(&styled)));
        assert_eq!(block.children.len(), 3);
        assert!(matches!(block.children[2].box_type, BoxType::AnonymousBlock));
        assert_eq!(block.children[2].children.len(), 1);

        let mut inline = LayoutBox::new(BoxType::InlineNode(&styled));
        inline.push_inline_child(LayoutBox::new(BoxType::InlineNode(&styled)));
        assert_eq!(inline.children.len(), 1);
        assert!(matches!(inline.children[0].box_type, BoxType::InlineNode(_)));
    }
}
