//! Token naming.

use serde::{Deserialize, Serialize};

/// A family of design tokens.
///
/// Each category maps a variant name onto a CSS custom property with a
/// fixed template:
///
/// | Category | Custom property |
/// |----------|-----------------|
/// | `font-family` | `--font-family-{variant}` |
/// | `font-size` | `--typography-size-{variant}` |
/// | `font-weight` | `--typography-weight-{variant}` |
/// | `line-height` | `--line-height-{variant}` |
/// | `status-color` | `--status-color-{variant}` |
/// | `content-color` | `--content-color-{variant}` |
/// | `letter-spacing` | `--typography--letter-spacing--{variant}` |
/// | `max-width` | `--typography--max-width--{variant}` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    StatusColor,
    ContentColor,
    LetterSpacing,
    MaxWidth,
}

impl TokenCategory {
    /// Returns the custom property name for `variant` in this category.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nice_typography::TokenCategory;
    ///
    /// assert_eq!(TokenCategory::FontSize.property_name("h1"), "--typography-size-h1");
    /// assert_eq!(
    ///     TokenCategory::MaxWidth.property_name("prose"),
    ///     "--typography--max-width--prose"
    /// );
    /// ```
    pub fn property_name(self, variant: &str) -> String {
        match self {
            TokenCategory::FontFamily => format!("--font-family-{}", variant),
            TokenCategory::FontSize => format!("--typography-size-{}", variant),
            TokenCategory::FontWeight => format!("--typography-weight-{}", variant),
            TokenCategory::LineHeight => format!("--line-height-{}", variant),
            TokenCategory::StatusColor => format!("--status-color-{}", variant),
            TokenCategory::ContentColor => format!("--content-color-{}", variant),
            TokenCategory::LetterSpacing => {
                format!("--typography--letter-spacing--{}", variant)
            }
            TokenCategory::MaxWidth => format!("--typography--max-width--{}", variant),
        }
    }
}

/// A (category, variant) pair naming one design token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TokenKey {
    pub category: TokenCategory,
    pub variant: &'static str,
}

impl TokenKey {
    pub const fn new(category: TokenCategory, variant: &'static str) -> Self {
        Self { category, variant }
    }

    /// The custom property this key refers to.
    pub fn property_name(&self) -> String {
        self.category.property_name(self.variant)
    }
}

/// What a [`TokenLookup`](super::TokenLookup) returns for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Custom property name, including the leading `--`.
    pub name: String,
    /// Literal value to use when the custom property is not defined.
    pub fallback: Option<String>,
}

impl Token {
    /// `var(--name)`.
    pub fn reference(&self) -> String {
        format!("var({})", self.name)
    }

    /// `var(--name, fallback)`, or the bare reference without a fallback.
    pub fn reference_with_fallback(&self) -> String {
        match &self.fallback {
            Some(fallback) => format!("var({}, {})", self.name, fallback),
            None => self.reference(),
        }
    }
}
