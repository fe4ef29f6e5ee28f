//! Marquee configuration file handling

use anyhow::{Context, Result};
use marquee_overlay::{EngineSettings, PopupConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "marquee.toml";

/// Top-level CLI configuration (marquee.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct MarqueeToml {
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// URL policy configuration
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// Accept plain `http://` URLs
    #[serde(default = "default_true")]
    pub allow_http: bool,
    /// Accept inline `data:image/...` URLs
    #[serde(default = "default_true")]
    pub allow_data_images: bool,
    /// Restrict hosts; empty accepts any host
    #[serde(default)]
    pub allowed_hosts: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allow_http: true,
            allow_data_images: true,
            allowed_hosts: Vec::new(),
        }
    }
}

impl MarqueeToml {
    /// Load from an explicit path, or from `marquee.toml` in the working
    /// directory when present. Defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Settings file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let local = Path::new(SETTINGS_FILE);
                if !local.exists() {
                    tracing::debug!("no {SETTINGS_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                local.to_path_buf()
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Load an overlay config (`.json` or `.toml`).
pub fn load_overlay(path: &Path) -> Result<PopupConfig> {
    PopupConfig::load(path).with_context(|| format!("Failed to load overlay config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(MarqueeToml::parse("").unwrap(), MarqueeToml::default());
    }

    #[test]
    fn test_sections() {
        let config = MarqueeToml::parse(
            r#"
            [engine]
            max_images = 3

            [policy]
            allow_http = false
            allowed_hosts = ["cdn.example.com"]
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.max_images, 3);
        assert_eq!(config.engine.rotation_interval_ms, 5_000);
        assert!(!config.policy.allow_http);
        assert!(config.policy.allow_data_images);
        assert_eq!(config.policy.allowed_hosts, vec!["cdn.example.com"]);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let err = MarqueeToml::load(Some(Path::new("/nope/marquee.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
