//! Stylesheet data model.
//!
//! [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
//!
//! These are the structures a CSS parser hands to the cascade. The engine
//! never reads CSS text itself.

use crate::selector::SimpleSelector;
use crate::values::Value;

/// [§ 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-a-declaration)
///
/// A CSS declaration (e.g., `margin-left: 10px`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The specified value.
    pub value: Value,
}

impl Declaration {
    /// Create a declaration.
    #[must_use]
    pub fn new(name: &str, value: Value) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// A CSS style rule (selectors + declarations).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// Selectors, most specific first.
    pub selectors: Vec<SimpleSelector>,
    /// The declarations in this rule block, in source order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Create a rule. Selectors are stably sorted by specificity, highest
    /// first, so the first matching selector is also the most specific one.
    #[must_use]
    pub fn new(mut selectors: Vec<SimpleSelector>, declarations: Vec<Declaration>) -> Self {
        selectors.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
        Self {
            selectors,
            declarations,
        }
    }
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// An ordered list of style rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// Rules in source order.
    pub rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Create a stylesheet from rules in source order.
    #[must_use]
    pub const fn new(rules: Vec<StyleRule>) -> Self {
        Self { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Specificity;

    #[test]
    fn test_rule_sorts_selectors_most_specific_first() {
        let rule = StyleRule::new(
            vec![
                SimpleSelector::tag("p"),
                SimpleSelector::id("main"),
                SimpleSelector::class("note"),
            ],
            vec![Declaration::new("display", Value::keyword("block"))],
        );
        let specificities: Vec<Specificity> =
            rule.selectors.iter().map(SimpleSelector::specificity).collect();
        assert_eq!(
            specificities,
            vec![
                Specificity(1, 0, 0),
                Specificity(0, 1, 0),
                Specificity(0, 0, 1)
            ]
        );
    }
}
