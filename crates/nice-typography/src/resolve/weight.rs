use crate::intent::ElementKind;
use crate::tokens::{TokenCategory, TokenKey};

use super::StyleValue;

/// Weight token applied to h1-h3 when no weight is given.
pub const HEADING_WEIGHT: TokenKey = TokenKey::new(TokenCategory::FontWeight, "heading");

/// Resolves the font weight.
///
/// An explicit weight always wins, even an empty one. Otherwise h1, h2 and
/// h3 get [`HEADING_WEIGHT`]; every other element, h4 included, stays unset
/// and inherits.
pub fn resolve_weight(weight: Option<&str>, element: ElementKind) -> Option<StyleValue> {
    match weight {
        Some(weight) => Some(StyleValue::literal(weight)),
        None => default_weight(element),
    }
}

fn default_weight(element: ElementKind) -> Option<StyleValue> {
    match element {
        ElementKind::H1 | ElementKind::H2 | ElementKind::H3 => {
            Some(StyleValue::Token(HEADING_WEIGHT))
        }
        // h4 is condensed but not bold.
        ElementKind::H4 | ElementKind::P | ElementKind::Span => None,
    }
}
