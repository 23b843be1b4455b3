//! # Nice Typography
//!
//! Typography style resolution for web UI components: a small set of
//! declarative intents (element, size, weight, color or status, alignment,
//! line height, code formatting, antialiasing) resolved into CSS
//! declarations that reference design tokens.
//!
//! ## Core Concepts
//!
//! - [`StyleIntent`]: Optional style inputs, as a caller writes them
//! - [`resolve`]: Pure defaulting and precedence rules, yielding a [`ResolvedStyle`]
//! - [`TokenRegistry`]: Design-token values, behind the [`TokenLookup`] trait
//! - [`Emitter`]: Turns a resolved style into a [`DeclarationBlock`]
//! - [`Typography`] and [`Renderer`]: The component and its HTML output
//!
//! ## Quick Start
//!
//! ```rust
//! use nice_typography::{ElementKind, Renderer, TokenRegistry, Typography};
//!
//! let renderer = Renderer::new(TokenRegistry::with_defaults()).unwrap();
//! let html = renderer
//!     .render(&Typography::new("Main Heading").element(ElementKind::H1))
//!     .unwrap();
//!
//! assert!(html.contains("font-size: var(--typography-size-h1, 2rem); font-size: 2rem;"));
//! assert!(html.contains("font-weight: var(--typography-weight-heading, 600);"));
//! assert!(html.contains("line-height: var(--line-height-condensed, 1.25);"));
//! ```
//!
//! ## Resolution Rules
//!
//! | Input | Rule |
//! |-------|------|
//! | color | `status` wins; core statuses use status-color tokens, others content-color |
//! | weight | explicit wins; else heading weight for h1-h3 only |
//! | line height | explicit wins; else `condensed` for h1-h4, `default` otherwise |
//! | size | explicit wins (declared twice); else the element's type scale |
//! | font family | `code` wins; else heading family for h1-h4, base otherwise |
//!
//! Resolution never fails and never reads tokens: token-backed values are
//! [`TokenKey`]s until an [`Emitter`] looks them up.
//!
//! ## Configuration
//!
//! [`TypographyConfig`] loads from YAML or JSON and sets the intent
//! defaults, the [`TokenMode`] and a token file merged over the built-in
//! tokens. See [`Renderer::from_config`].

pub mod config;
pub mod emit;
pub mod intent;
pub mod render;
pub mod resolve;
pub mod tokens;

pub use config::{ConfigError, IntentDefaults, TokenMode, TypographyConfig};
pub use emit::{Declaration, DeclarationBlock, Emitter};
pub use intent::{
    Align, ElementKind, LetterSpacing, LineHeight, MaxWidth, Status, StatusFamily, StyleIntent,
    UnknownKeyword,
};
pub use render::{RenderError, Renderer, Typography};
pub use resolve::{
    resolve, resolve_color, resolve_line_height, resolve_size, resolve_weight, resolve_with,
    status_token, ResolvedSize, ResolvedStyle, StyleValue, HEADING_WEIGHT,
};
pub use tokens::{
    parse_var_reference, Token, TokenCategory, TokenError, TokenKey, TokenLookup, TokenRegistry,
    ValidationError,
};
