//! CSS selector matching
//!
//! This module implements simple-selector matching per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! # Limitations
//!
//! Only a single compound of type, ID, class and universal selectors is
//! supported. Pseudo-classes, attribute selectors and combinators
//! (descendant, child, sibling) are not, and [`parse_selector`] rejects them.

use std::iter::Peekable;
use std::str::Chars;

use quokka_dom::ElementData;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// A simple selector: an optional type, an optional ID and any number of
/// classes, all of which must hold for the element. A missing field does not
/// constrain the match, so the empty selector is the universal selector `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    pub tag_name: Option<String>,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    pub id: Option<String>,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    pub classes: Vec<String>,
}

impl SimpleSelector {
    /// The universal selector `*`.
    #[must_use]
    pub fn universal() -> Self {
        Self::default()
    }

    /// A type selector such as `div`.
    #[must_use]
    pub fn tag(tag_name: &str) -> Self {
        Self {
            tag_name: Some(tag_name.to_string()),
            ..Self::default()
        }
    }

    /// An ID selector such as `#main`.
    #[must_use]
    pub fn id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// A class selector such as `.note`.
    #[must_use]
    pub fn class(class: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            ..Self::default()
        }
    }

    /// Add an ID constraint.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add a class constraint.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// `(has id, number of classes, has type)`.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let a = u32::from(self.id.is_some());
        let b = u32::try_from(self.classes.len()).unwrap_or(u32::MAX);
        let c = u32::from(self.tag_name.is_some());
        Specificity(a, b, c)
    }

    /// [§ 4.1 Selector Matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
    /// "A selector is said to match an element when..."
    ///
    /// Every present component must match.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        // [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
        if self
            .tag_name
            .as_ref()
            .is_some_and(|tag| *tag != element.tag_name)
        {
            return false;
        }

        // [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
        // An element without an id attribute never matches an ID selector.
        if self
            .id
            .as_ref()
            .is_some_and(|id| element.id() != Some(id.as_str()))
        {
            return false;
        }

        // [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
        let element_classes = element.classes();
        self.classes
            .iter()
            .all(|class| element_classes.contains(class.as_str()))
    }
}

/// Returns true if `selector` matches `element`.
#[must_use]
pub fn matches(element: &ElementData, selector: &SimpleSelector) -> bool {
    selector.matches(element)
}

/// Check if a character can continue an identifier.
/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}

/// Consume identifier characters; returns None if there are none.
fn parse_identifier(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        let _ = chars.next();
    }
    if ident.is_empty() { None } else { Some(ident) }
}

/// Parse a simple selector such as `div`, `#main`, `.note`, `*` or
/// `div#main.note.wide`.
///
/// [§ 4 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax)
///
/// Returns None for empty input and for anything outside the simple-selector
/// grammar (combinators, pseudo-classes, attribute selectors, selector lists).
#[must_use]
pub fn parse_selector(raw: &str) -> Option<SimpleSelector> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut selector = SimpleSelector::default();
    let mut chars = trimmed.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '#' => {
                let _ = chars.next();
                selector.id = Some(parse_identifier(&mut chars)?);
            }
            '.' => {
                let _ = chars.next();
                selector.classes.push(parse_identifier(&mut chars)?);
            }
            '*' => {
                // [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
                // Only valid in type position.
                if selector.tag_name.is_some() || selector.id.is_some() || !selector.classes.is_empty() {
                    return None;
                }
                let _ = chars.next();
            }
            c if is_ident_char(c) && !c.is_ascii_digit() => {
                if selector.tag_name.is_some() || selector.id.is_some() || !selector.classes.is_empty() {
                    return None;
                }
                selector.tag_name = Some(parse_identifier(&mut chars)?);
            }
            _ => return None,
        }
    }

    Some(selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quokka_dom::AttributesMap;

    fn element(tag: &str, id: Option<&str>, class: Option<&str>) -> ElementData {
        let mut attrs = AttributesMap::new();
        if let Some(id) = id {
            let _ = attrs.insert("id".to_string(), id.to_string());
        }
        if let Some(class) = class {
            let _ = attrs.insert("class".to_string(), class.to_string());
        }
        ElementData::new(tag, attrs)
    }

    #[test]
    fn test_universal_matches_everything() {
        let selector = SimpleSelector::universal();
        assert!(selector.matches(&element("div", None, None)));
        assert!(selector.matches(&element("span", Some("x"), Some("a b"))));
        assert_eq!(selector.specificity(), Specificity(0, 0, 0));
    }

    #[test]
    fn test_id_selector_requires_id_attribute() {
        let selector = SimpleSelector::id("main");
        assert!(!selector.matches(&element("div", None, None)));
        assert!(!selector.matches(&element("div", Some("other"), None)));
        assert!(selector.matches(&element("div", Some("main"), None)));
    }

    #[test]
    fn test_all_classes_must_be_present() {
        let selector = SimpleSelector::class("a").with_class("b");
        assert!(selector.matches(&element("p", None, Some("b c a"))));
        assert!(!selector.matches(&element("p", None, Some("a"))));
        assert!(!selector.matches(&element("p", None, None)));
    }

    #[test]
    fn test_parse_compound() {
        let selector = parse_selector("div#main.note.wide").unwrap();
        assert_eq!(selector.tag_name.as_deref(), Some("div"));
        assert_eq!(selector.id.as_deref(), Some("main"));
        assert_eq!(selector.classes, vec!["note".to_string(), "wide".to_string()]);
        assert_eq!(selector.specificity(), Specificity(1, 2, 1));
    }

    #[test]
    fn test_parse_rejects_unsupported_syntax() {
        assert!(parse_selector("").is_none());
        assert!(parse_selector("div p").is_none());
        assert!(parse_selector("ul > li").is_none());
        assert!(parse_selector("a:hover").is_none());
        assert!(parse_selector("[href]").is_none());
        assert!(parse_selector(".").is_none());
        assert!(parse_selector("#a*").is_none());
    }
}
