//! Configuration: intent defaults, token emission mode and token sources.
//!
//! Configuration files are YAML or JSON; every field is optional.
//!
//! ```yaml
//! defaults:
//!   element: p
//!   antialiased: true
//! token_mode: inline
//! tokens: tokens.yaml
//! ```
//!
//! A relative `tokens` path is resolved against the configuration file's
//! directory when loaded with [`TypographyConfig::load`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::intent::ElementKind;
use crate::tokens::{TokenError, TokenRegistry};

/// Values used for intent inputs the caller left unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentDefaults {
    pub element: ElementKind,
    pub antialiased: bool,
    pub legibility_optimized: bool,
}

impl Default for IntentDefaults {
    fn default() -> Self {
        Self {
            element: ElementKind::P,
            antialiased: false,
            legibility_optimized: false,
        }
    }
}

/// How token-backed values are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenMode {
    /// `var(--name, fallback)`, so host-page custom properties take effect.
    #[default]
    Reference,
    /// The registry's literal value, or the bare reference when the token
    /// has none.
    Inline,
}

/// Error returned when loading configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config file extension: '{}'", path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error(transparent)]
    Tokens(#[from] TokenError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    pub defaults: IntentDefaults,
    pub token_mode: TokenMode,
    /// Token file merged over the built-in tokens.
    pub tokens: Option<PathBuf>,
}

impl TypographyConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a configuration file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let mut config = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            _ => {
                return Err(ConfigError::UnsupportedExtension {
                    path: path.to_path_buf(),
                })
            }
        };

        if let (Some(tokens), Some(dir)) = (config.tokens.as_ref(), path.parent()) {
            if tokens.is_relative() {
                config.tokens = Some(dir.join(tokens));
            }
        }

        tracing::debug!(path = %path.display(), mode = ?config.token_mode, "loaded typography config");
        Ok(config)
    }

    /// Builds the token registry: built-in tokens, with the configured
    /// token file merged over them.
    pub fn token_registry(&self) -> Result<TokenRegistry, ConfigError> {
        let mut tokens = TokenRegistry::with_defaults();
        if let Some(path) = &self.tokens {
            tokens.merge(TokenRegistry::from_file(path)?);
        }
        Ok(tokens)
    }
}
