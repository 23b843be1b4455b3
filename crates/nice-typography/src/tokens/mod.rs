//! Design tokens: the key-value collaborator behind every token reference.
//!
//! This module provides:
//!
//! - [`TokenCategory`] and [`TokenKey`]: How resolvers name a token
//! - [`Token`]: A custom-property reference plus its optional literal fallback
//! - [`TokenLookup`]: The read-only lookup injected into the emitter
//! - [`TokenRegistry`]: The default lookup, with aliases and file loading
//! - [`TokenError`], [`ValidationError`]: Loading and validation failures
//!
//! Resolvers never read tokens. They only produce [`TokenKey`]s, and the
//! emitter asks a [`TokenLookup`] what CSS to write for each key. This keeps
//! resolution testable without any token source at all.

mod defaults;
mod error;
mod key;
mod reference;
mod registry;

pub use error::{TokenError, ValidationError};
pub use key::{Token, TokenCategory, TokenKey};
pub use reference::parse_var_reference;
pub use registry::TokenRegistry;

/// Read-only token source.
///
/// Lookup is total: every key maps to a custom-property reference, since
/// token names follow a fixed template per [`TokenCategory`]. Only the
/// literal fallback is optional.
pub trait TokenLookup {
    /// Returns the reference and fallback for `key`.
    fn lookup(&self, key: &TokenKey) -> Token;
}
