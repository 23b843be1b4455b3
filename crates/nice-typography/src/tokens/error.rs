//! Token loading and validation errors.

use std::path::PathBuf;

/// Error returned when token alias validation fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An alias references a token that isn't registered.
    #[error("token '{from}' aliases non-existent token '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution.
    #[error("cycle detected in token aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// Error returned when loading a token file fails.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to read token file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid YAML tokens: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON tokens: {0}")]
    Json(#[from] serde_json::Error),

    /// Token files must end in `.yaml`, `.yml` or `.json`.
    #[error("unsupported token file extension: '{}'", path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
