//! Application Configuration
//!
//! Manages the tool's settings:
//! - localized display strings (placeholder, build status, maintainer templates)
//! - device access (SDK path, default serial)
//!
//! Every section has defaults, so a partial TOML file is valid.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SettingsError};

/// Localized strings, keyed like the Settings string resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StringsConfig {
    /// Placeholder for any missing property
    pub device_info_default: String,
    pub build_is_official_title: String,
    pub build_is_community_title: String,
    /// Official build, maintainer known. One `%1$s` slot.
    pub build_is_official_summary: String,
    /// Official build, maintainer unknown
    pub build_is_official_summary_oopsie: String,
    /// Community build, maintainer known. One `%1$s` slot.
    pub build_is_community_summary: String,
    /// Community build, maintainer unknown
    pub build_is_community_summary_oopsie: String,
    pub adaptive_connectivity_title: String,
    pub adaptive_connectivity_switch_on: String,
    pub adaptive_connectivity_switch_off: String,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            device_info_default: "Unknown".to_string(),
            build_is_official_title: "Official build".to_string(),
            build_is_community_title: "Community build".to_string(),
            build_is_official_summary: "Maintained by %1$s".to_string(),
            build_is_official_summary_oopsie: "Official build, maintainer not listed".to_string(),
            build_is_community_summary: "Community build by %1$s".to_string(),
            build_is_community_summary_oopsie: "Community build, maintainer unknown".to_string(),
            adaptive_connectivity_title: "Adaptive connectivity".to_string(),
            adaptive_connectivity_switch_on: "On".to_string(),
            adaptive_connectivity_switch_off: "Off".to_string(),
        }
    }
}

/// Substitute `arg` into a resource-style template.
///
/// Supports `%1$s` and `%s` slots and the `%%` escape. Other `%` sequences
/// are copied through untouched.
pub fn format_template(template: &str, arg: &str) -> String {
    let mut out = String::with_capacity(template.len() + arg.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("%1$s") {
            out.push_str(arg);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("%s") {
            out.push_str(arg);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("%%") {
            out.push('%');
            rest = after;
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Device access configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceConfig {
    /// Android SDK root; `adb` is looked up on PATH when unset
    pub sdk_path: Option<PathBuf>,
    /// Serial used when a command does not name a device
    pub default_serial: Option<String>,
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Configuration version for migrations
    pub version: u32,
    /// Localized strings
    pub strings: StringsConfig,
    /// Device access settings
    pub device: DeviceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strings: StringsConfig::default(),
            device: DeviceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("org", "risingos", "rise-settings")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration from the default location, writing defaults if absent
    pub async fn load() -> Result<Self> {
        let config_file = Self::config_file()
            .ok_or_else(|| SettingsError::Config("Cannot determine config path".into()))?;

        if config_file.exists() {
            Self::load_from(&config_file).await
        } else {
            info!("Config file not found, using defaults");
            let config = AppConfig::default();
            config.save_to(&config_file).await?;
            Ok(config)
        }
    }

    /// Load configuration from a specific file
    pub async fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.version == 0 {
            return Err(SettingsError::Config("config version must be at least 1".into()));
        }
        Ok(config)
    }

    /// Save configuration to a specific file
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = toml::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        debug!("Config saved to {:?}", path);
        Ok(())
    }
}
