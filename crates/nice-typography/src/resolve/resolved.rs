//! Composition of the individual resolvers.

use serde::Serialize;

use crate::config::IntentDefaults;
use crate::intent::{Align, ElementKind, LineHeight, StyleIntent};
use crate::tokens::{TokenCategory, TokenKey};

use super::{
    resolve_color, resolve_line_height, resolve_size, resolve_weight, ResolvedSize, StyleValue,
};

/// The fully determined style handed to the emitter.
///
/// `line_height` and `size` are always concrete. `color` and `weight` may
/// be unset, in which case no declaration is emitted for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    pub element: ElementKind,
    /// `code`, else `heading` for h1-h4, else `base`.
    pub font_family: TokenKey,
    pub color: Option<StyleValue>,
    pub size: ResolvedSize,
    pub weight: Option<StyleValue>,
    pub line_height: LineHeight,
    pub align: Option<Align>,
    pub antialiased: bool,
    pub legibility_optimized: bool,
    pub code: bool,
    pub letter_spacing: Option<TokenKey>,
    pub max_width: Option<TokenKey>,
    pub class_name: Option<String>,
}

/// Resolves an intent with the built-in defaults: `p`, not antialiased,
/// not legibility-optimized.
///
/// # Example
///
/// ```rust
/// use nice_typography::{resolve, ElementKind, LineHeight, StyleIntent, HEADING_WEIGHT, StyleValue};
///
/// let style = resolve(&StyleIntent::new().element(ElementKind::H1));
///
/// assert_eq!(style.line_height, LineHeight::Condensed);
/// assert_eq!(style.weight, Some(StyleValue::Token(HEADING_WEIGHT)));
/// assert_eq!(style.color, None);
/// ```
pub fn resolve(intent: &StyleIntent) -> ResolvedStyle {
    resolve_with(intent, &IntentDefaults::default())
}

/// Resolves an intent, filling unset element and flags from `defaults`.
pub fn resolve_with(intent: &StyleIntent, defaults: &IntentDefaults) -> ResolvedStyle {
    let element = intent.element.unwrap_or(defaults.element);

    let style = ResolvedStyle {
        element,
        font_family: font_family(element, intent.code),
        color: resolve_color(intent.color.as_deref(), intent.status),
        size: resolve_size(intent.size.as_deref(), element),
        weight: resolve_weight(intent.weight.as_deref(), element),
        line_height: resolve_line_height(intent.line_height, element),
        align: intent.align,
        antialiased: intent.antialiased.unwrap_or(defaults.antialiased),
        legibility_optimized: intent
            .legibility_optimized
            .unwrap_or(defaults.legibility_optimized),
        code: intent.code,
        letter_spacing: intent
            .letter_spacing
            .map(|spacing| TokenKey::new(TokenCategory::LetterSpacing, spacing.as_str())),
        max_width: intent
            .max_width
            .map(|width| TokenKey::new(TokenCategory::MaxWidth, width.as_str())),
        class_name: intent.class_name.clone(),
    };

    tracing::debug!(
        element = %style.element,
        code = style.code,
        has_color = style.color.is_some(),
        line_height = %style.line_height,
        "resolved typography style"
    );
    style
}

fn font_family(element: ElementKind, code: bool) -> TokenKey {
    let variant = if code {
        "code"
    } else if element.is_heading() {
        "heading"
    } else {
        "base"
    };
    TokenKey::new(TokenCategory::FontFamily, variant)
}
