// SPDX-License-Identifier: MPL-2.0
//! User preferences, stored as a sectioned `settings.toml`.
//!
//! Three sections: `[general]` holds the language and theme mode,
//! `[notifications]` the toast on/off switch, `[privacy]` the location
//! and auto-lock toggles. Early releases wrote a flat file with a
//! `locale` string and a `dark_mode` boolean; those files still load
//! and the next save rewrites them in the sectioned format.
//!
//! The file location follows `paths`: an explicit directory argument
//! beats the `HOME_IQ_CONFIG_DIR` environment variable, which beats
//! the platform config directory.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Language and appearance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language tag, e.g. "en" or "de". `None` means follow the
    /// system locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Light, dark, or follow the system. Absent means system.
    #[serde(default, deserialize_with = "parse_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(
        default = "default_notifications_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: default_notifications_enabled(),
        }
    }
}

/// Privacy toggles shown on the settings screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivacyConfig {
    /// Allow devices to use the home's location.
    #[serde(
        default = "default_location_access",
        skip_serializing_if = "Option::is_none"
    )]
    pub location_access: Option<bool>,

    /// Engage door locks automatically at night.
    #[serde(default = "default_auto_lock", skip_serializing_if = "Option::is_none")]
    pub auto_lock: Option<bool>,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            location_access: default_location_access(),
            auto_lock: default_auto_lock(),
        }
    }
}

/// The whole settings file, one field per `[section]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub privacy: PrivacyConfig,
}

impl Config {
    pub fn notifications_enabled(&self) -> bool {
        self.notifications
            .enabled
            .unwrap_or(DEFAULT_NOTIFICATIONS_ENABLED)
    }

    pub fn location_access(&self) -> bool {
        self.privacy
            .location_access
            .unwrap_or(DEFAULT_LOCATION_ACCESS)
    }

    pub fn auto_lock(&self) -> bool {
        self.privacy.auto_lock.unwrap_or(DEFAULT_AUTO_LOCK)
    }
}

/// Flat pre-1.0 format: a `locale` string and a `dark_mode` boolean.
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    locale: Option<String>,
    #[serde(default)]
    dark_mode: Option<bool>,
    #[serde(default)]
    notifications_enabled: Option<bool>,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: legacy.locale,
                theme_mode: match legacy.dark_mode {
                    Some(true) => ThemeMode::Dark,
                    Some(false) => ThemeMode::Light,
                    None => ThemeMode::System,
                },
            },
            notifications: NotificationsConfig {
                enabled: legacy
                    .notifications_enabled
                    .or(default_notifications_enabled()),
            },
            privacy: PrivacyConfig::default(),
        }
    }
}

fn default_notifications_enabled() -> Option<bool> {
    Some(DEFAULT_NOTIFICATIONS_ENABLED)
}

fn default_location_access() -> Option<bool> {
    Some(DEFAULT_LOCATION_ACCESS)
}

fn default_auto_lock() -> Option<bool> {
    Some(DEFAULT_AUTO_LOCK)
}

/// Case-insensitive `theme_mode` values, so hand-edited files keep
/// working.
fn parse_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse()
        .map_err(|()| D::Error::custom(format!("unknown theme_mode `{raw}`")))
}

fn config_file_in(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    Some(paths::config_dir_with_override(base_dir)?.join(CONFIG_FILE))
}

/// Reads settings from the platform config directory.
///
/// Returns `(config, optional_warning)`. A corrupted file yields the
/// default config plus a catalog key describing the problem; a missing
/// file is not an error.
pub fn load() -> (Config, Option<String>) {
    load_from_dir(None)
}

/// Same as [`load`], but the directory can be redirected for tests.
pub fn load_from_dir(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_in(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_file(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notifications.configLoadError".to_string()),
        ),
    }
}

/// Loads configuration from a specific path, migrating the legacy flat
/// format when encountered.
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;

    // Sectioned format wins when any known section header is present.
    let sectioned = ["[general]", "[notifications]", "[privacy]"]
        .iter()
        .any(|header| content.contains(header));
    if !sectioned {
        if let Ok(legacy) = toml::from_str::<LegacyConfig>(&content) {
            return Ok(Config::from(legacy));
        }
    }

    Ok(toml::from_str(&content)?)
}

/// Writes settings to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    save_to_dir(config, None)
}

/// Same as [`save`], but the directory can be redirected for tests.
pub fn save_to_dir(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file_in(base_dir) {
        Some(path) => save_file(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific path, creating parent directories
/// as needed.
pub fn save_file(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    Ok(fs::write(path, content)?)
}
