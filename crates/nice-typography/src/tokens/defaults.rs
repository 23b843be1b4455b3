//! Built-in token values.
//!
//! Colors have no built-in literal; they are expected to come from the
//! host's design tokens, so their references are emitted without fallback.

use once_cell::sync::Lazy;

use super::key::TokenCategory;
use super::registry::TokenRegistry;

pub(crate) const FONT_FAMILY_BASE: &str = "system-ui, -apple-system, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";

pub(crate) const FONT_FAMILY_CODE: &str = "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace";

pub(crate) static DEFAULT_TOKENS: Lazy<TokenRegistry> = Lazy::new(|| {
    TokenRegistry::new()
        .add(TokenCategory::FontFamily, "base", FONT_FAMILY_BASE)
        .add(TokenCategory::FontFamily, "heading", "var(--font-family-base)")
        .add(TokenCategory::FontFamily, "code", FONT_FAMILY_CODE)
        // Type scale; keep in sync with the size table in resolve::size.
        .add(TokenCategory::FontSize, "h1", "2rem")
        .add(TokenCategory::FontSize, "h2", "1.5rem")
        .add(TokenCategory::FontSize, "h3", "1.25rem")
        .add(TokenCategory::FontSize, "h4", "1.125rem")
        .add(TokenCategory::FontSize, "default", "1rem")
        .add(TokenCategory::FontWeight, "heading", "600")
        .add(TokenCategory::LineHeight, "default", "1.5")
        .add(TokenCategory::LineHeight, "condensed", "1.25")
        .add(TokenCategory::LetterSpacing, "tight", "-0.025em")
        .add(TokenCategory::LetterSpacing, "base", "0")
        .add(TokenCategory::LetterSpacing, "wide", "0.025em")
        .add(TokenCategory::LetterSpacing, "wider", "0.05em")
        .add(TokenCategory::MaxWidth, "prose", "65ch")
        .add(TokenCategory::MaxWidth, "wide", "80ch")
        .add(TokenCategory::MaxWidth, "full", "none")
});
