//! CSS Cascading
//!
//! This module implements the specified-value cascade per
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/),
//! restricted to specificity and order of appearance.
//!
//! There are no origins (user-agent, user, author), no `!important`, and no
//! inheritance: a property absent from the map is simply unset.

use std::collections::HashMap;

use quokka_dom::ElementData;

use crate::selector::Specificity;
use crate::stylesheet::{StyleRule, Stylesheet};
use crate::values::Value;

/// Property name to specified value, one map per styled element.
pub type PropertyMap = HashMap<String, Value>;

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// A matched rule with the specificity of its first matching selector.
#[derive(Debug, Clone, Copy)]
pub struct MatchedRule<'a> {
    /// Specificity of the matching selector.
    pub specificity: Specificity,
    /// The rule whose declarations apply.
    pub rule: &'a StyleRule,
}

/// Match one rule against an element.
///
/// A rule matches if any of its selectors does. Selectors are stored most
/// specific first, so the first match carries the rule's highest specificity.
fn match_rule<'a>(element: &ElementData, rule: &'a StyleRule) -> Option<MatchedRule<'a>> {
    rule.selectors
        .iter()
        .find(|selector| selector.matches(element))
        .map(|selector| MatchedRule {
            specificity: selector.specificity(),
            rule,
        })
}

/// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// Linearly scan the stylesheet and return every matching rule, in source
/// order. Each rule appears at most once.
#[must_use]
pub fn matching_rules<'a>(element: &ElementData, stylesheet: &'a Stylesheet) -> Vec<MatchedRule<'a>> {
    stylesheet
        .rules
        .iter()
        .filter_map(|rule| match_rule(element, rule))
        .collect()
}

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
/// "The cascade takes an unordered list of declared values for a given property
/// on a given element, sorts them by their declaration's precedence..."
///
/// Compute the specified values of one element.
#[must_use]
pub fn specified_values(element: &ElementData, stylesheet: &Stylesheet) -> PropertyMap {
    let mut values = PropertyMap::new();
    let mut rules = matching_rules(element, stylesheet);

    // [§ 6.4.3 Specificity](https://www.w3.org/TR/css-cascade-4/#cascade-specificity)
    // Sort by specificity (lower first, so later ones override). The sort is
    // stable, so equal specificity keeps source order and the later rule wins.
    rules.sort_by(|a, b| a.specificity.cmp(&b.specificity));

    for matched in rules {
        for declaration in &matched.rule.declarations {
            let _ = values.insert(declaration.name.clone(), declaration.value.clone());
        }
    }

    values
}
