use crate::config::TokenMode;
use crate::resolve::{ResolvedStyle, StyleValue};
use crate::tokens::{TokenCategory, TokenKey, TokenLookup};

use super::declaration::DeclarationBlock;

/// Font smoothing hints applied when `antialiased` is set.
pub const ANTIALIASING: [(&str, &str); 3] = [
    ("-webkit-font-smoothing", "antialiased"),
    ("-moz-osx-font-smoothing", "grayscale"),
    ("text-rendering", "optimizeLegibility"),
];

/// Hardware acceleration hints applied when `legibility_optimized` is set.
pub const OPTIMIZED_LEGIBILITY: [(&str, &str); 4] = [
    ("backface-visibility", "hidden"),
    ("perspective", "1000px"),
    ("transform-style", "preserve-3d"),
    ("will-change", "transform"),
];

/// Turns resolved styles into declarations, looking tokens up in an
/// injected [`TokenLookup`].
///
/// # Example
///
/// ```rust
/// use nice_typography::{resolve, ElementKind, Emitter, StyleIntent, TokenMode, TokenRegistry};
///
/// let tokens = TokenRegistry::with_defaults();
/// let style = resolve(&StyleIntent::new().element(ElementKind::H2));
///
/// let block = Emitter::new(&tokens, TokenMode::Reference).emit(&style);
/// assert_eq!(
///     block.values("font-size"),
///     vec!["var(--typography-size-h2, 1.5rem)", "1.5rem"]
/// );
///
/// let block = Emitter::new(&tokens, TokenMode::Inline).emit(&style);
/// assert_eq!(block.last("font-weight"), Some("600"));
/// ```
pub struct Emitter<'a> {
    tokens: &'a dyn TokenLookup,
    mode: TokenMode,
}

impl<'a> Emitter<'a> {
    pub fn new(tokens: &'a dyn TokenLookup, mode: TokenMode) -> Self {
        Self { tokens, mode }
    }

    /// Emits declarations in a fixed order: margin, font family, color,
    /// font size (twice), font weight, antialiasing, legibility, alignment,
    /// line height, letter spacing, max width.
    pub fn emit(&self, style: &ResolvedStyle) -> DeclarationBlock {
        let mut block = DeclarationBlock::new();
        block.push("margin", "0");
        block.push("font-family", self.token(&style.font_family));

        if let Some(color) = style.color.as_ref().filter(|value| !value.is_blank()) {
            block.push("color", self.value(color));
        }

        block.push("font-size", self.value(&style.size.primary));
        block.push("font-size", self.size_fallback(style));

        if let Some(weight) = style.weight.as_ref().filter(|value| !value.is_blank()) {
            block.push("font-weight", self.value(weight));
        }

        if style.antialiased {
            for (property, value) in ANTIALIASING {
                block.push(property, value);
            }
        }

        if style.legibility_optimized {
            for (property, value) in OPTIMIZED_LEGIBILITY {
                block.push(property, value);
            }
        }

        if let Some(align) = style.align {
            block.push("text-align", align.as_str());
        }

        let line_height = TokenKey::new(TokenCategory::LineHeight, style.line_height.as_str());
        block.push("line-height", self.token(&line_height));

        if let Some(spacing) = &style.letter_spacing {
            block.push("letter-spacing", self.token(spacing));
        }
        if let Some(width) = &style.max_width {
            block.push("max-width", self.token(width));
        }

        block
    }

    /// Formats a single resolved value.
    pub fn value(&self, value: &StyleValue) -> String {
        match value {
            StyleValue::Literal(literal) => literal.clone(),
            StyleValue::Token(key) => self.token(key),
        }
    }

    /// The trailing `font-size` literal. A registered size token replaces
    /// the built-in type scale value, since the last declaration wins.
    fn size_fallback(&self, style: &ResolvedStyle) -> String {
        match (&style.size.primary, &style.size.fallback) {
            (StyleValue::Token(key), StyleValue::Literal(literal)) => self
                .tokens
                .lookup(key)
                .fallback
                .unwrap_or_else(|| literal.clone()),
            (_, fallback) => self.value(fallback),
        }
    }

    fn token(&self, key: &TokenKey) -> String {
        let token = self.tokens.lookup(key);
        match self.mode {
            TokenMode::Reference => token.reference_with_fallback(),
            TokenMode::Inline => token.fallback.clone().unwrap_or_else(|| token.reference()),
        }
    }
}
