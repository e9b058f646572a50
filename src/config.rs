//! Configuration management for flixtui
//!
//! Config is stored at ~/.config/flixtui/config.toml. Every field is
//! optional; accessors fall back to built-in defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::tvmaze::{DEFAULT_BASE_URL, DEFAULT_FEED_QUERY};
use crate::timers::DEFAULT_DEBOUNCE;

/// Default HTTP timeout for catalog requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog API base URL
    pub api_url: Option<String>,
    /// Term used for the home feed's bulk query
    pub feed_query: Option<String>,
    /// Quiet period before suggestions are fetched
    pub suggest_debounce_ms: Option<u64>,
    /// HTTP timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Where logs are written
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get config file path (~/.config/flixtui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flixtui").join("config.toml"))
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Self {
        Self::path().map(|p| Self::load_from(&p)).unwrap_or_default()
    }

    /// Load config from `path`; a missing or malformed file yields defaults
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| match toml::from_str(&s) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn feed_query(&self) -> &str {
        self.feed_query.as_deref().unwrap_or(DEFAULT_FEED_QUERY)
    }

    pub fn suggest_debounce(&self) -> Duration {
        self.suggest_debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Log file path (~/.cache/flixtui/flixtui.log unless configured)
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir().map(|p| p.join("flixtui").join("flixtui.log"))
        })
    }
}
