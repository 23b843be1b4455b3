//! Render errors.

use crate::config::ConfigError;
use crate::tokens::TokenError;

/// Error returned when building a renderer or rendering markup fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Tokens(#[from] TokenError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
