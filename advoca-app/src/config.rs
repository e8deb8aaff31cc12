//! Application configuration, loaded from the platform config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_AUTOPLAY_MS: u64 = 5000;

/// Failure while reading an existing configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-tunable application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Testimonial autoplay interval in milliseconds.
    pub autoplay_interval_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    /// Directory holding images and downloadable documents.
    pub asset_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_MS,
            window_width: 1280.0,
            window_height: 800.0,
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl SiteConfig {
    /// Load `config.json` from the platform config directory, falling back
    /// to defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("advoca").join("config.json");
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config.sanitized(),
                    Err(err) => {
                        log::warn!(
                            "ignoring config at {}: {err}",
                            path.display()
                        );
                    }
                }
            }
        }
        Self::default()
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Autoplay interval as a [`Duration`].
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Resolve an asset-relative path against the configured asset directory.
    pub fn asset(&self, relative: &str) -> PathBuf {
        self.asset_dir.join(relative)
    }

    // A zero interval would spin the timer; nonsense window sizes would
    // produce an unusable surface. Both fall back to defaults.
    fn sanitized(mut self) -> Self {
        if self.autoplay_interval_ms == 0 {
            log::warn!(
                "autoplay_interval_ms must be positive; using {DEFAULT_AUTOPLAY_MS}"
            );
            self.autoplay_interval_ms = DEFAULT_AUTOPLAY_MS;
        }
        let defaults = Self::default();
        if !self.window_width.is_finite() || self.window_width < 320.0 {
            self.window_width = defaults.window_width;
        }
        if !self.window_height.is_finite() || self.window_height < 240.0 {
            self.window_height = defaults.window_height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_five_seconds() {
        let config = SiteConfig::default();
        assert_eq!(config.autoplay_interval(), Duration::from_millis(5000));
        assert_eq!(config.asset("rob-blue.webp"), Path::new("assets/rob-blue.webp"));
    }

    #[test]
    fn loads_a_partial_file_with_defaults_for_the_rest() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "autoplay_interval_ms": 2500 }"#)
            .expect("write config");

        let config = SiteConfig::load_from(&path).expect("load config");
        assert_eq!(config.autoplay_interval_ms, 2500);
        assert_eq!(config.window_width, 1280.0);
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = SiteConfig::default();
        config.autoplay_interval_ms = 8000;
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        let json = serde_json::to_string_pretty(&config).expect("serialize");
        std::fs::write(&path, json).expect("write config");

        let loaded = SiteConfig::load_from(&path).expect("load config");
        assert_eq!(loaded.autoplay_interval_ms, 8000);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = SiteConfig {
            autoplay_interval_ms: 0,
            ..SiteConfig::default()
        }
        .sanitized();
        assert_eq!(config.autoplay_interval_ms, DEFAULT_AUTOPLAY_MS);
    }

    #[test]
    fn malformed_files_surface_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").expect("write config");
        assert!(matches!(
            SiteConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
