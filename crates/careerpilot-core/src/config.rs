//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which holds the API base URL and the last used username.
//!
//! Configuration is stored at `~/.config/careerpilot/config.json`. The
//! `CAREERPILOT_API_URL` environment variable overrides the stored URL.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_API_BASE_URL;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "careerpilot";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "CAREERPILOT_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the API base URL: environment, then config file, then default.
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Directory holding the session and, per user, the progress caches.
    pub fn cache_root() -> Result<PathBuf> {
        let cache_dir =
            dirs::cache_dir().ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Progress caches are kept per user so accounts never share progress.
    pub fn user_cache_dir(username: &str) -> Result<PathBuf> {
        Ok(Self::cache_root()?.join(sanitize_dir_name(username)))
    }
}

/// Map a username to a directory name, one-to-one.
///
/// Case is preserved. Characters outside `[A-Za-z0-9.-]`, `_` itself and a
/// leading `.` are written as their hex code point between underscores,
/// so distinct usernames never share a directory.
fn sanitize_dir_name(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }

    let mut cleaned = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        let keep = c.is_ascii_alphanumeric() || c == '-' || (c == '.' && i > 0);
        if keep {
            cleaned.push(c);
        } else {
            cleaned.push_str(&format!("_{:x}_", c as u32));
        }
    }
    cleaned
}
