use crate::intent::{Status, StatusFamily};
use crate::tokens::{TokenCategory, TokenKey};

use super::StyleValue;

/// Resolves the text color.
///
/// A `status` always wins over `color`. Core statuses (`active`, `error`,
/// `success`, `warning`) resolve to status-color tokens; every other status
/// resolves to a content-color token. Without a status, `color` passes
/// through unchanged, including when it is unset.
///
/// # Example
///
/// ```rust
/// use nice_typography::{resolve_color, Status, StyleValue, TokenCategory};
///
/// assert_eq!(resolve_color(Some("red"), None), Some(StyleValue::literal("red")));
/// assert_eq!(
///     resolve_color(Some("red"), Some(Status::Success)),
///     Some(StyleValue::token(TokenCategory::StatusColor, "success"))
/// );
/// assert_eq!(resolve_color(None, None), None);
/// ```
pub fn resolve_color(color: Option<&str>, status: Option<Status>) -> Option<StyleValue> {
    match status {
        Some(status) => Some(StyleValue::Token(status_token(status))),
        None => color.map(StyleValue::literal),
    }
}

/// The color token a status maps to.
pub fn status_token(status: Status) -> TokenKey {
    let category = match status.family() {
        StatusFamily::Core => TokenCategory::StatusColor,
        StatusFamily::Content => TokenCategory::ContentColor,
    };
    TokenKey::new(category, status.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_passes_through_without_status() {
        assert_eq!(
            resolve_color(Some("var(--brand)"), None),
            Some(StyleValue::literal("var(--brand)"))
        );
        assert_eq!(resolve_color(Some(""), None), Some(StyleValue::literal("")));
    }

    #[test]
    fn test_unset_color_and_status_is_unset() {
        assert_eq!(resolve_color(None, None), None);
    }

    #[test]
    fn test_status_wins_over_color() {
        assert_eq!(
            resolve_color(Some("hotpink"), Some(Status::Error)),
            Some(StyleValue::token(TokenCategory::StatusColor, "error"))
        );
    }

    #[test]
    fn test_core_statuses_use_status_color() {
        for status in [Status::Active, Status::Error, Status::Success, Status::Warning] {
            let key = status_token(status);
            assert_eq!(key.category, TokenCategory::StatusColor);
            assert_eq!(key.variant, status.as_str());
        }
    }

    #[test]
    fn test_other_statuses_use_content_color() {
        assert_eq!(
            resolve_color(None, Some(Status::Primary)),
            Some(StyleValue::token(TokenCategory::ContentColor, "primary"))
        );

        let content = Status::ALL
            .iter()
            .filter(|status| status_token(**status).category == TokenCategory::ContentColor)
            .count();
        assert_eq!(content, 9);
    }
}
