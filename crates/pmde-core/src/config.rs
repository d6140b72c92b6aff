//! Site configuration.
//!
//! Loaded once at launch from an optional JSON file. Every field has a
//! default, so an empty object (or no file at all) yields a working site.
//!
//! ```json
//! {
//!   "site_name": "PMDE",
//!   "rotation": { "hero_interval_ms": 5000, "transition_ms": 300 },
//!   "parallax": { "strength": 5.0 }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// File name looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "site.json";

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the footer and window title
    pub site_name: String,
    /// Canonical public URL
    pub site_url: String,
    /// Carousel timings
    pub rotation: RotationConfig,
    /// Hero parallax tuning shared by every page
    pub parallax: ParallaxConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "PMDE".to_string(),
            site_url: "https://www.pmde.mu".to_string(),
            rotation: RotationConfig::default(),
            parallax: ParallaxConfig::default(),
        }
    }
}

/// Longest accepted interval or transition: one day
pub const MAX_TIMING_MS: u64 = 24 * 60 * 60 * 1000;

/// Carousel timing configuration (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Hero carousel auto-advance period
    pub hero_interval_ms: u64,
    /// Sub-item icon highlight period inside tab content
    pub sub_item_interval_ms: u64,
    /// Duration of one fade phase (out or in)
    pub transition_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            hero_interval_ms: 5000,
            sub_item_interval_ms: 3000,
            transition_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Pointer parallax strength used by page heroes
    pub strength: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { strength: 5.0 }
    }
}

impl SiteConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Default location: `<config dir>/pmde-site/site.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pmde-site")
            .join(CONFIG_FILE_NAME)
    }

    /// Reject values the carousels cannot run with.
    pub fn validate(&self) -> SiteResult<()> {
        if self.rotation.hero_interval_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "rotation.hero_interval_ms must be > 0".to_string(),
            ));
        }
        if self.rotation.sub_item_interval_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "rotation.sub_item_interval_ms must be > 0".to_string(),
            ));
        }
        let timings = [
            ("rotation.hero_interval_ms", self.rotation.hero_interval_ms),
            ("rotation.sub_item_interval_ms", self.rotation.sub_item_interval_ms),
            ("rotation.transition_ms", self.rotation.transition_ms),
        ];
        for (name, value) in timings {
            if value > MAX_TIMING_MS {
                return Err(SiteError::InvalidConfig(format!(
                    "{name} must be at most {MAX_TIMING_MS}"
                )));
            }
        }
        if !self.parallax.strength.is_finite() {
            return Err(SiteError::InvalidConfig(
                "parallax.strength must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rotation.hero_interval_ms, 5000);
        assert_eq!(config.rotation.transition_ms, 300);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_rotation_keeps_other_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"rotation": {"hero_interval_ms": 8000}}"#).unwrap();
        assert_eq!(config.rotation.hero_interval_ms, 8000);
        assert_eq!(config.rotation.sub_item_interval_ms, 3000);
    }

    #[test]
    fn zero_interval_rejected() {
        let mut config = SiteConfig::default();
        config.rotation.hero_interval_ms = 0;
        assert!(matches!(config.validate(), Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn oversized_timings_rejected() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"rotation": {"hero_interval_ms": 18446744073709551615}}"#).unwrap();
        assert!(matches!(config.validate(), Err(SiteError::InvalidConfig(_))));

        let mut config = SiteConfig::default();
        config.rotation.transition_ms = MAX_TIMING_MS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rotation.transition_ms"));

        config.rotation.transition_ms = MAX_TIMING_MS;
        config.rotation.sub_item_interval_ms = MAX_TIMING_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"site_name": "Staging"}"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.site_name, "Staging");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SiteError::Io(_)));
    }

    #[test]
    fn load_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"rotation": {"sub_item_interval_ms": 0}}"#).unwrap();

        assert!(matches!(
            SiteConfig::load(&path),
            Err(SiteError::InvalidConfig(_))
        ));
    }
}
