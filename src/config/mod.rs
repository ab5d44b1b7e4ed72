// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[toast]` - Auto-dismiss switch and per-category durations
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `TOAST_NOTIFIER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_notifier::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Turn on auto-dismiss
//! config.toast.auto_dismiss = true;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::notifications::DismissPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastNotifier";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOAST_NOTIFIER_CONFIG_DIR";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Removes toasts after their category's duration when enabled.
    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss: bool,

    #[serde(default = "default_success_secs", skip_serializing_if = "Option::is_none")]
    pub success_secs: Option<u64>,

    #[serde(default = "default_info_secs", skip_serializing_if = "Option::is_none")]
    pub info_secs: Option<u64>,

    #[serde(default = "default_warning_secs", skip_serializing_if = "Option::is_none")]
    pub warning_secs: Option<u64>,

    /// Errors wait for manual dismissal unless set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_secs: Option<u64>,

    #[serde(default = "default_other_secs", skip_serializing_if = "Option::is_none")]
    pub other_secs: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_dismiss: DEFAULT_AUTO_DISMISS,
            success_secs: default_success_secs(),
            info_secs: default_info_secs(),
            warning_secs: default_warning_secs(),
            error_secs: None,
            other_secs: default_other_secs(),
        }
    }
}

impl ToastConfig {
    /// Builds the dismiss policy, clamping durations into the accepted range.
    #[must_use]
    pub fn dismiss_policy(&self) -> DismissPolicy {
        let secs = |value: Option<u64>| {
            value.map(|s| Duration::from_secs(s.clamp(MIN_DISMISS_SECS, MAX_DISMISS_SECS)))
        };
        DismissPolicy {
            success: secs(self.success_secs),
            info: secs(self.info_secs),
            warning: secs(self.warning_secs),
            error: secs(self.error_secs),
            other: secs(self.other_secs),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastConfig,
}

fn default_auto_dismiss() -> bool {
    DEFAULT_AUTO_DISMISS
}

fn default_success_secs() -> Option<u64> {
    Some(DEFAULT_SUCCESS_SECS)
}

fn default_info_secs() -> Option<u64> {
    Some(DEFAULT_INFO_SECS)
}

fn default_warning_secs() -> Option<u64> {
    Some(DEFAULT_WARNING_SECS)
}

fn default_other_secs() -> Option<u64> {
    Some(DEFAULT_OTHER_SECS)
}

/// Resolves the config file path: environment override, then platform default.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable or invalid one
/// yields defaults plus a warning describing the problem.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    load_or_default(&path)
}

/// Loads `path`, falling back to defaults with a warning on any failure.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => {
            let warning = format!("{}: {}", path.display(), err);
            log::warn!("using default settings, failed to load {}", warning);
            (Config::default(), Some(warning))
        }
    }
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
