use crate::intent::{ElementKind, LineHeight};

/// Resolves the line height. Never unset: headings (h1-h4) default to
/// `condensed`, everything else to `default`.
pub fn resolve_line_height(line_height: Option<LineHeight>, element: ElementKind) -> LineHeight {
    line_height.unwrap_or(if element.is_heading() {
        LineHeight::Condensed
    } else {
        LineHeight::Default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_default_to_condensed() {
        for element in [
            ElementKind::H1,
            ElementKind::H2,
            ElementKind::H3,
            ElementKind::H4,
        ] {
            assert_eq!(resolve_line_height(None, element), LineHeight::Condensed);
        }
    }

    #[test]
    fn test_body_defaults_to_default() {
        assert_eq!(
            resolve_line_height(None, ElementKind::P),
            LineHeight::Default
        );
        assert_eq!(
            resolve_line_height(None, ElementKind::Span),
            LineHeight::Default
        );
    }

    #[test]
    fn test_explicit_line_height_wins() {
        for element in ElementKind::ALL {
            assert_eq!(
                resolve_line_height(Some(LineHeight::Default), *element),
                LineHeight::Default
            );
            assert_eq!(
                resolve_line_height(Some(LineHeight::Condensed), *element),
                LineHeight::Condensed
            );
        }
    }
}
