//! Error types for loading overlay configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a config or settings document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for config loading
pub type Result<T> = std::result::Result<T, ConfigError>;
