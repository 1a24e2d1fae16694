// ABOUTME: Configuration loading for booth-kiosk.
// ABOUTME: Reads ~/.booth-kiosk/config.toml (or an override path) and fills in defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::router::MenuItem;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "BOOTH_KIOSK_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content: ContentConfig,
    pub logging: LoggingConfig,
    pub contacts: ContactsConfig,
    pub ui: UiConfig,
}

/// Where booth content comes from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// TOML content file replacing the built-in booth data.
    pub path: Option<PathBuf>,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Contact log side channel settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    /// Append accepted submissions to a JSONL file.
    pub jsonl: bool,
    pub path: Option<PathBuf>,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            jsonl: true,
            path: None,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub flash_seconds: u64,
    pub tick_ms: u64,
    pub start_view: MenuItem,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            flash_seconds: 3,
            tick_ms: 250,
            start_view: MenuItem::Overview,
        }
    }
}

impl Config {
    /// Load config from `path`, the env override, or ~/.booth-kiosk/config.toml.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let path = match explicit {
            Some(path) => path,
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".booth-kiosk")
            .join("config.toml")
    }

    /// Directory for the diagnostic log and the contact log.
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("booth-kiosk")
    }

    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("kiosk.log"))
    }

    /// Path of the JSONL contact log, or `None` when it is disabled.
    pub fn contacts_file(&self) -> Option<PathBuf> {
        if !self.contacts.jsonl {
            return None;
        }
        Some(
            self.contacts
                .path
                .clone()
                .unwrap_or_else(|| Self::data_dir().join("contacts.jsonl")),
        )
    }
}
