use serde::Serialize;

use crate::intent::ElementKind;
use crate::tokens::TokenCategory;

use super::StyleValue;

/// A font size declared twice: `primary` first, then `fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSize {
    pub primary: StyleValue,
    pub fallback: StyleValue,
}

/// Resolves the font size.
///
/// A non-empty explicit size is used for both declarations. Otherwise the
/// element picks a size token plus a literal from the type scale:
///
/// | Element | Token | Fallback |
/// |---------|-------|----------|
/// | h1 | `h1` | `2rem` |
/// | h2 | `h2` | `1.5rem` |
/// | h3 | `h3` | `1.25rem` |
/// | h4 | `h4` | `1.125rem` |
/// | p, span | `default` | `1rem` |
///
/// # Example
///
/// ```rust
/// use nice_typography::{resolve_size, ElementKind, StyleValue, TokenCategory};
///
/// let size = resolve_size(None, ElementKind::H1);
/// assert_eq!(size.primary, StyleValue::token(TokenCategory::FontSize, "h1"));
/// assert_eq!(size.fallback, StyleValue::literal("2rem"));
///
/// let size = resolve_size(Some("10px"), ElementKind::H1);
/// assert_eq!(size.primary, StyleValue::literal("10px"));
/// assert_eq!(size.fallback, StyleValue::literal("10px"));
/// ```
pub fn resolve_size(size: Option<&str>, element: ElementKind) -> ResolvedSize {
    match size.filter(|size| !size.is_empty()) {
        Some(size) => ResolvedSize {
            primary: StyleValue::literal(size),
            fallback: StyleValue::literal(size),
        },
        None => {
            let (variant, fallback) = type_scale(element);
            ResolvedSize {
                primary: StyleValue::token(TokenCategory::FontSize, variant),
                fallback: StyleValue::literal(fallback),
            }
        }
    }
}

fn type_scale(element: ElementKind) -> (&'static str, &'static str) {
    match element {
        ElementKind::H1 => ("h1", "2rem"),
        ElementKind::H2 => ("h2", "1.5rem"),
        ElementKind::H3 => ("h3", "1.25rem"),
        ElementKind::H4 => ("h4", "1.125rem"),
        ElementKind::P | ElementKind::Span => ("default", "1rem"),
    }
}
