//! Prop resolution: computing effective style values from a [`StyleIntent`].
//!
//! This module provides one pure function per style concern, plus the
//! orchestrator that composes them:
//!
//! - [`resolve_color`]: `status` over `color`
//! - [`resolve_weight`]: explicit weight, else the heading weight for h1-h3
//! - [`resolve_line_height`]: explicit line height, else condensed for headings
//! - [`resolve_size`]: explicit size, else the per-element type scale
//! - [`resolve`] / [`resolve_with`]: the full [`ResolvedStyle`]
//!
//! None of these read tokens. Token-backed values come out as
//! [`StyleValue::Token`] keys for the emitter to look up.
//!
//! [`StyleIntent`]: crate::StyleIntent

mod color;
mod line_height;
mod resolved;
mod size;
mod weight;

use serde::Serialize;

use crate::tokens::{TokenCategory, TokenKey};

pub use color::{resolve_color, status_token};
pub use line_height::resolve_line_height;
pub use resolved::{resolve, resolve_with, ResolvedStyle};
pub use size::{resolve_size, ResolvedSize};
pub use weight::{resolve_weight, HEADING_WEIGHT};

/// A resolved style value: either a literal CSS value supplied by the
/// caller or a reference to a design token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum StyleValue {
    Literal(String),
    Token(TokenKey),
}

impl StyleValue {
    pub fn literal(value: impl Into<String>) -> Self {
        StyleValue::Literal(value.into())
    }

    pub const fn token(category: TokenCategory, variant: &'static str) -> Self {
        StyleValue::Token(TokenKey::new(category, variant))
    }

    /// Returns `true` for an empty or whitespace-only literal, which the
    /// emitter skips.
    pub fn is_blank(&self) -> bool {
        match self {
            StyleValue::Literal(value) => value.trim().is_empty(),
            StyleValue::Token(_) => false,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            StyleValue::Literal(value) => Some(value),
            StyleValue::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&TokenKey> {
        match self {
            StyleValue::Token(key) => Some(key),
            StyleValue::Literal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_value_accessors() {
        let literal = StyleValue::literal("red");
        assert_eq!(literal.as_literal(), Some("red"));
        assert_eq!(literal.as_token(), None);

        let token = StyleValue::token(TokenCategory::StatusColor, "error");
        assert_eq!(
            token.as_token(),
            Some(&TokenKey::new(TokenCategory::StatusColor, "error"))
        );
        assert_eq!(token.as_literal(), None);
    }

    #[test]
    fn test_style_value_blank() {
        assert!(StyleValue::literal("").is_blank());
        assert!(StyleValue::literal("  ").is_blank());
        assert!(!StyleValue::literal("0").is_blank());
        assert!(!StyleValue::token(TokenCategory::FontWeight, "heading").is_blank());
    }

    #[test]
    fn test_style_value_serializes_tagged() {
        let json = serde_json::to_value(StyleValue::token(TokenCategory::FontSize, "h2")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "token",
                "value": {"category": "font-size", "variant": "h2"}
            })
        );
    }
}
