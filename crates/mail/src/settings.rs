//! Tunable settings for a purge run
//!
//! Settings are loaded from (in order of priority):
//! 1. An explicit JSON file passed on the command line
//! 2. `settings.json` in the config directory
//! 3. Built-in defaults
//!
//! Every field is optional in the file; missing fields keep their defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings filename in the config directory
const SETTINGS_FILE: &str = "settings.json";

/// Largest page the search endpoint will return
pub const MAX_PAGE_SIZE: usize = 500;

/// Largest id list accepted by batchDelete / batchModify
pub const MAX_BATCH_SIZE: usize = 1000;

/// Settings for the API client and the batch processor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PurgeSettings {
    /// Base URL of the mailbox resource (…/users/me)
    pub api_base_url: String,
    /// Search page size (1-500)
    pub page_size: usize,
    /// Identifiers per batch call (1-1000)
    pub batch_size: usize,
    /// Pause between consecutive batches
    pub batch_delay_ms: u64,
    /// Upper bound on search pages fetched in one run
    pub max_pages: usize,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
}

impl Default for PurgeSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://gmail.googleapis.com/gmail/v1/users/me".to_string(),
            page_size: MAX_PAGE_SIZE,
            batch_size: MAX_BATCH_SIZE,
            batch_delay_ms: 500,
            max_pages: 2000,
            connect_timeout_secs: 30,
            read_timeout_secs: 60,
            write_timeout_secs: 120,
        }
    }
}

impl PurgeSettings {
    /// Load settings from the config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        let settings: Option<Self> = config::load_json_if_exists(SETTINGS_FILE)?;
        Ok(settings.map(Self::normalized).unwrap_or_default())
    }

    /// Load settings from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings: Self = config::load_json_file(path)?;
        Ok(settings.normalized())
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("Failed to parse settings JSON")?;
        Ok(settings.normalized())
    }

    /// Get the default settings file path (~/.config/sender-purge/settings.json)
    pub fn default_settings_path() -> Option<PathBuf> {
        config::config_path(SETTINGS_FILE)
    }

    /// Clamp sizes into the ranges the API accepts
    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        self.batch_size = self.batch_size.clamp(1, MAX_BATCH_SIZE);
        self.max_pages = self.max_pages.max(1);
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }
}
