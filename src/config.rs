//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which includes the reminder service base URL and the last used
//! username.
//!
//! Configuration is stored at `~/.config/pingme/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/preference directory paths
const APP_NAME: &str = "pingme";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Base URL of the reminder-management service, used when the config
/// does not override it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Service base URL, falling back to the compiled-in default
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join(CONFIG_FILE))
    }

    /// Private application directory holding the config and the token
    /// preference file
    pub fn app_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_fallback() {
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        let config = Config {
            base_url: Some("http://10.0.2.2:8080".to_string()),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://10.0.2.2:8080");
    }

    #[test]
    fn test_config_roundtrip_json() {
        let config = Config {
            base_url: Some("http://example.test:8080".to_string()),
            last_username: Some("alice".to_string()),
        };
        let json = serde_json::to_string(&config).expect("serialize config");
        let parsed: Config = serde_json::from_str(&json).expect("parse config");
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.last_username, Some("alice".to_string()));
    }
}
