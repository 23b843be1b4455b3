//! Style intents: the declarative inputs a caller hands to a
//! [`Typography`](crate::Typography).
//!
//! This module provides:
//!
//! - [`ElementKind`]: The semantic element the text renders as
//! - [`Status`]: Semantic states that imply a color
//! - [`Align`], [`LineHeight`], [`LetterSpacing`], [`MaxWidth`]: Closed keyword sets
//! - [`StyleIntent`]: The full set of optional inputs
//!
//! Every keyword type parses from and serializes to the lowercase keyword
//! used in props (`"h1"`, `"condensed"`, `"success"`, ...). When a
//! [`StyleIntent`] is deserialized, unrecognized keywords are dropped to
//! unset rather than failing, so that defaults apply.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a string is not a member of a keyword set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownKeyword {
    /// Which keyword set was being parsed (e.g. `"element kind"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Returns the keyword used in props and token names.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    _ => Err(UnknownKeyword {
                        kind: $label,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

keyword_enum! {
    /// The semantic element a piece of text renders as.
    ///
    /// Determines the emitted tag and the structural defaults (size,
    /// weight, line height, font family).
    pub enum ElementKind as "element kind" {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        P => "p",
        Span => "span",
    }
}

impl ElementKind {
    /// The HTML tag name emitted for this element.
    pub fn tag(self) -> &'static str {
        self.as_str()
    }

    /// Returns `true` for `h1` through `h4`.
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            ElementKind::H1 | ElementKind::H2 | ElementKind::H3 | ElementKind::H4
        )
    }
}

impl Default for ElementKind {
    fn default() -> Self {
        ElementKind::P
    }
}

keyword_enum! {
    /// Horizontal text alignment.
    pub enum Align as "alignment" {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
}

keyword_enum! {
    /// Line height setting.
    ///
    /// - `default`: body text leading
    /// - `condensed`: tighter leading for headings
    pub enum LineHeight as "line height" {
        Default => "default",
        Condensed => "condensed",
    }
}

keyword_enum! {
    /// Semantic status that implies a text color.
    ///
    /// See [`Status::family`] for how each status maps onto a token family.
    pub enum Status as "status" {
        Active => "active",
        Dark => "dark",
        Darker => "darker",
        Default => "default",
        Disabled => "disabled",
        Error => "error",
        Highlighted => "highlighted",
        Light => "light",
        Lighter => "lighter",
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Warning => "warning",
    }
}

/// The token family a [`Status`] draws its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFamily {
    /// `active`, `error`, `success`, `warning`: the status-color tokens.
    Core,
    /// Shade variants (`darker`, `dark`, `default`, `light`, `lighter`) and
    /// extended variants (`disabled`, `highlighted`, `primary`,
    /// `secondary`): the content-color tokens.
    Content,
}

impl Status {
    /// Returns the token family this status resolves through.
    pub fn family(self) -> StatusFamily {
        match self {
            Status::Active | Status::Error | Status::Success | Status::Warning => {
                StatusFamily::Core
            }
            _ => StatusFamily::Content,
        }
    }
}

keyword_enum! {
    /// Letter spacing (tracking).
    pub enum LetterSpacing as "letter spacing" {
        Tight => "tight",
        Base => "base",
        Wide => "wide",
        Wider => "wider",
    }
}

keyword_enum! {
    /// Maximum line length.
    ///
    /// `prose` follows the 45-75 characters per line rule.
    pub enum MaxWidth as "max width" {
        Prose => "prose",
        Wide => "wide",
        Full => "full",
    }
}

/// The full set of optional style inputs supplied by a caller.
///
/// Free-form values (`color`, `size`, `weight`) are opaque CSS strings.
/// `element`, `antialiased` and `legibility_optimized` stay unset until
/// resolution, where [`IntentDefaults`](crate::IntentDefaults) fill them.
///
/// # Example
///
/// ```rust
/// use nice_typography::{ElementKind, Status, StyleIntent};
///
/// let intent = StyleIntent::new()
///     .element(ElementKind::H2)
///     .status(Status::Success)
///     .antialiased(true);
///
/// assert_eq!(intent.element, Some(ElementKind::H2));
/// ```
///
/// Intents can also be read from props-shaped JSON or YAML. Unknown
/// keywords are ignored:
///
/// ```rust
/// use nice_typography::{ElementKind, StyleIntent};
///
/// let intent: StyleIntent =
///     serde_json::from_str(r#"{"as": "h3", "lineHeight": "roomy", "weight": 700}"#).unwrap();
///
/// assert_eq!(intent.element, Some(ElementKind::H3));
/// assert_eq!(intent.line_height, None);
/// assert_eq!(intent.weight.as_deref(), Some("700"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleIntent {
    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub align: Option<Align>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub antialiased: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legibility_optimized: Option<bool>,

    /// Element to render; `p` when unset.
    #[serde(
        rename = "as",
        alias = "element",
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub element: Option<ElementKind>,

    /// Monospace font family, regardless of element.
    #[serde(deserialize_with = "nullable_flag")]
    pub code: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Overrides `color` when set.
    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Status>,

    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_height: Option<LineHeight>,

    #[serde(
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<String>,

    #[serde(
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub letter_spacing: Option<LetterSpacing>,

    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_width: Option<MaxWidth>,
}

impl StyleIntent {
    /// Creates an intent with every input unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(mut self, element: ElementKind) -> Self {
        self.element = Some(element);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn antialiased(mut self, antialiased: bool) -> Self {
        self.antialiased = Some(antialiased);
        self
    }

    pub fn legibility_optimized(mut self, optimized: bool) -> Self {
        self.legibility_optimized = Some(optimized);
        self
    }

    pub fn code(mut self, code: bool) -> Self {
        self.code = code;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn line_height(mut self, line_height: LineHeight) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn letter_spacing(mut self, spacing: LetterSpacing) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn max_width(mut self, max_width: MaxWidth) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// Reads an optional keyword, treating unknown values as unset.
fn lenient_keyword<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownKeyword>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(value)) => match value.parse() {
            Ok(keyword) => Some(keyword),
            Err(err) => {
                tracing::warn!(%err, "ignoring unrecognized typography prop");
                None
            }
        },
        Some(other) => {
            tracing::warn!(value = %other, "ignoring non-keyword typography prop");
            None
        }
    })
}

/// Reads a flag where `null` means `false`.
fn nullable_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// A CSS value that YAML or JSON sources may write as a bare number.
///
/// Numbers are rendered in canonical form (`1.10` becomes `1.1`); only a
/// quoted string keeps its original spelling.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl StringOrNumber {
    pub(crate) fn into_css(self) -> String {
        match self {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Reads an optional CSS value that may be written as a bare number.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(raw.map(StringOrNumber::into_css))
}
