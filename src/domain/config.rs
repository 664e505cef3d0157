//! Config - Application Configuration
//!
//! Loaded from `catalog-scroll.toml` in the platform config directory. An
//! empty or missing file means defaults; unknown keys are rejected so typos
//! surface at startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;

const CONFIG_FILE_NAME: &str = "catalog-scroll.toml";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Products endpoint queried with `limit` and `skip`
    pub api_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// UI language tag (`en`, `zh`); system locale when unset
    pub locale: Option<String>,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            locale: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl CatalogConfig {
    /// Path of the config file, creating an empty one on first run
    pub fn default_path() -> Result<PathBuf> {
        let path = get_or_create_config_dir()?.join(CONFIG_FILE_NAME);
        if !path.exists() {
            std::fs::write(&path, "")?;
        }
        Ok(path)
    }

    /// Load from the default location
    pub fn try_load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to load config file");
        })
    }

    /// Parse and validate config text
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Write this config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Invalid {
                message: format!("api_url must be an http(s) URL, got {:?}", self.api_url),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Invalid {
                message: "request_timeout_secs must be greater than zero".to_string(),
            });
        }
        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(Error::Invalid {
                message: format!(
                    "window must be at least {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}, got {}x{}",
                    self.window_width, self.window_height
                ),
            });
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = CatalogConfig::parse("  \n").expect("config");
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.api_url, "https://dummyjson.com/products");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = CatalogConfig::parse(
            r#"
            api_url = "http://localhost:8080/products"
            locale = "zh"
            "#,
        )
        .expect("config");

        assert_eq!(config.api_url, "http://localhost:8080/products");
        assert_eq!(config.locale.as_deref(), Some("zh"));
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            CatalogConfig::parse(r#"api_url = "ftp://example.com""#),
            Err(Error::Invalid { .. })
        ));
        assert!(matches!(
            CatalogConfig::parse("request_timeout_secs = 0"),
            Err(Error::Invalid { .. })
        ));
        assert!(matches!(
            CatalogConfig::parse("page_size = 20"),
            Err(Error::TomlDe { .. })
        ));
    }

    #[test]
    fn save_and_load_through_file() {
        let path = std::env::temp_dir().join(format!(
            "catalog-scroll-config-{}.toml",
            std::process::id()
        ));
        let config = CatalogConfig {
            locale: Some("en".to_string()),
            ..Default::default()
        };

        config.save_to(&path).expect("save");
        let loaded = CatalogConfig::load_from(&path).expect("load");
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
