// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::client::google::DEFAULT_BASE_URL;
use crate::paths::AppPaths;
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Bearer token for the calendar store. Obtaining and refreshing it is
    /// the caller's concern; this crate only carries it on requests.
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Fallback calendar when a menu key has no entry in `calendar_ids`.
    #[serde(default)]
    pub default_calendar: Option<String>,
    /// Menu key (e.g. "english_k12_lunch") → target calendar id.
    #[serde(default)]
    pub calendar_ids: HashMap<String, String>,
    /// Optional prefix for every generated event title, e.g. the district
    /// abbreviation.
    #[serde(default)]
    pub title_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            api_base_url: default_api_base_url(),
            default_calendar: None,
            calendar_ids: HashMap::new(),
            title_prefix: String::new(),
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load() -> Result<Self> {
        let path = AppPaths::get_config_file_path()?;

        // Explicitly detect missing file so callers can fall back to defaults.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Detects whether an error indicates that the config file was missing,
    /// checking both our explicit message and IO NotFound anywhere in the
    /// error chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }
        false
    }

    pub fn save(&self) -> Result<()> {
        let path = AppPaths::get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Calendar id for a menu key, falling back to the default calendar.
    pub fn resolve_calendar(&self, menu_key: &str) -> Option<&str> {
        self.calendar_ids
            .get(menu_key)
            .map(|s| s.as_str())
            .or(self.default_calendar.as_deref())
    }

    /// Applies the configured title prefix, if any.
    pub fn full_title(&self, title: &str) -> String {
        if self.title_prefix.is_empty() {
            title.to_string()
        } else {
            format!("{} - {}", self.title_prefix, title)
        }
    }
}
