//! Property tests for width resolution and cascade ordering.

use quickcheck_macros::quickcheck;
use quokka_css::layout::resolve_block_width;
use quokka_css::{
    Declaration, LengthOrAuto, SimpleSelector, StyleRule, Stylesheet, Value, specified_values,
};
use quokka_dom::{AttributesMap, ElementData};

/// `None` stands for `auto`. Whole-pixel inputs keep f32 sums exact.
fn length(value: Option<u16>) -> LengthOrAuto {
    value.map_or(LengthOrAuto::Auto, |px| LengthOrAuto::Px(f32::from(px)))
}

#[quickcheck]
fn used_widths_satisfy_the_constraint_equation(
    containing: u16,
    width: Option<u16>,
    margin_left: Option<u16>,
    margin_right: Option<u16>,
    edges: u16,
) -> bool {
    let edges = f32::from(edges);
    let used = resolve_block_width(
        f32::from(containing),
        length(width),
        length(margin_left),
        length(margin_right),
        edges,
    );
    used.margin_left + edges + used.width + used.margin_right == f32::from(containing)
}

#[quickcheck]
fn used_width_is_never_negative(containing: u16, margin_left: Option<u16>, edges: u16) -> bool {
    let used = resolve_block_width(
        f32::from(containing),
        LengthOrAuto::Auto,
        length(margin_left),
        LengthOrAuto::Auto,
        f32::from(edges),
    );
    used.width >= 0.0
}

#[quickcheck]
fn resolving_used_widths_again_changes_nothing(
    containing: u16,
    width: Option<u16>,
    margin_left: Option<u16>,
    margin_right: Option<u16>,
    edges: u16,
) -> bool {
    let containing = f32::from(containing);
    let edges = f32::from(edges);
    let first = resolve_block_width(
        containing,
        length(width),
        length(margin_left),
        length(margin_right),
        edges,
    );
    let second = resolve_block_width(
        containing,
        LengthOrAuto::Px(first.width),
        LengthOrAuto::Px(first.margin_left),
        LengthOrAuto::Px(first.margin_right),
        edges,
    );
    first == second
}

fn selector_for(kind: u8) -> SimpleSelector {
    match kind % 4 {
        0 => SimpleSelector::id("main"),
        1 => SimpleSelector::class("note"),
        2 => SimpleSelector::tag("p"),
        _ => SimpleSelector::universal(),
    }
}

#[quickcheck]
fn more_specific_rule_wins_and_ties_go_to_the_later_rule(first: u8, second: u8) -> bool {
    let mut attrs = AttributesMap::new();
    let _ = attrs.insert("id".to_string(), "main".to_string());
    let _ = attrs.insert("class".to_string(), "note".to_string());
    let element = ElementData::new("p", attrs);

    let (earlier, later) = (selector_for(first), selector_for(second));
    let expected = if later.specificity() >= earlier.specificity() {
        Value::px(2.0)
    } else {
        Value::px(1.0)
    };

    let stylesheet = Stylesheet::new(vec![
        StyleRule::new(vec![earlier], vec![Declaration::new("width", Value::px(1.0))]),
        StyleRule::new(vec![later], vec![Declaration::new("width", Value::px(2.0))]),
    ]);
    specified_values(&element, &stylesheet).get("width") == Some(&expected)
}
