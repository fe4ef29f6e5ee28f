//! Engine-wide settings
//!
//! Tunables that are not part of an individual overlay's config. Usually
//! read from `marquee.toml`; every key is optional.
//!
//! ```toml
//! rotation_interval_ms = 4000
//! max_images = 4
//! effects_enabled = true
//! twinkle = false
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default slide rotation period
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5_000;

/// Fastest slide rotation honored
pub const MIN_ROTATION_INTERVAL_MS: u64 = 250;

/// Default cap on rendered images
pub const DEFAULT_MAX_IMAGES: usize = 6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Period of the image slider rotation
    pub rotation_interval_ms: u64,
    /// Maximum number of images kept after safety filtering
    pub max_images: usize,
    /// Render decorative effect layers
    pub effects_enabled: bool,
    /// Relocate particles on a timer for effects that twinkle
    pub twinkle: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL_MS,
            max_images: DEFAULT_MAX_IMAGES,
            effects_enabled: true,
            twinkle: true,
        }
    }
}

impl EngineSettings {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Rotation period, never shorter than [`MIN_ROTATION_INTERVAL_MS`].
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms.max(MIN_ROTATION_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(EngineSettings::from_toml_str("").unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_partial_document() {
        let settings = EngineSettings::from_toml_str("max_images = 2\ntwinkle = false").unwrap();
        assert_eq!(settings.max_images, 2);
        assert!(!settings.twinkle);
        assert_eq!(settings.rotation_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_rotation_interval_is_clamped() {
        let settings = EngineSettings::from_toml_str("rotation_interval_ms = 0").unwrap();
        assert_eq!(settings.rotation_interval(), Duration::from_millis(MIN_ROTATION_INTERVAL_MS));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineSettings::load(Path::new("/definitely/not/here/marquee.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("marquee.toml"));
    }
}
