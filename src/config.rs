//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! The configurable surface is the candidate mask set (which countries are
//! offered, and in what order — order decides import matching) and UI
//! preferences.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::CountryMask;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// The built-in candidate mask set, used when no config file exists.
///
/// Order matters: external values are matched against candidates in order
/// (first fit wins), so more specific prefixes should come first.
#[must_use]
pub fn default_masks() -> Vec<CountryMask> {
    vec![
        CountryMask {
            key: "ru".to_string(),
            name: "Russia".to_string(),
            emoji: "🇷🇺".to_string(),
            prefix: "+7".to_string(),
            pattern: "(***) - *** - ** - **".to_string(),
        },
        CountryMask {
            key: "us".to_string(),
            name: "United States".to_string(),
            emoji: "🇺🇸".to_string(),
            prefix: "+1".to_string(),
            pattern: "(***) *** - ****".to_string(),
        },
        CountryMask {
            key: "uk".to_string(),
            name: "United Kingdom".to_string(),
            emoji: "🇬🇧".to_string(),
            prefix: "+44".to_string(),
            pattern: "**** **** ****".to_string(),
        },
        CountryMask {
            key: "de".to_string(),
            name: "Germany".to_string(),
            emoji: "🇩🇪".to_string(),
            prefix: "+49".to_string(),
            pattern: "*** / **** - ****".to_string(),
        },
    ]
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PhoneForm/config.toml`
/// - macOS: `~/Library/Application Support/PhoneForm/config.toml`
/// - Windows: `%APPDATA%\PhoneForm\config.toml`
///
/// # Validation
///
/// - the mask list must be non-empty (the widget needs an active mask)
/// - mask keys must be unique (they identify the selection across updates)
/// - each mask must pass [`CountryMask`] field validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Candidate masks offered by the selector, in matching order
    #[serde(default = "default_masks")]
    pub masks: Vec<CountryMask>,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with the built-in mask set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            masks: default_masks(),
            ui: UiConfig::default(),
        }
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("PhoneForm");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file here is an error: the caller
    /// asked for this file specifically. Contents are parsed, not
    /// validated; callers run [`Config::validate`] before use so they can
    /// report validation separately from I/O failures.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.masks.is_empty() {
            anyhow::bail!("Mask list cannot be empty: at least one country mask is required");
        }

        let mut seen = std::collections::HashSet::new();
        for mask in &self.masks {
            // Re-run field validation; serde deserialization bypasses the
            // CountryMask constructor.
            CountryMask::new(
                mask.key.clone(),
                mask.name.clone(),
                mask.emoji.clone(),
                mask.prefix.clone(),
                mask.pattern.clone(),
            )?;

            if !seen.insert(mask.key.as_str()) {
                anyhow::bail!("Duplicate mask key '{}' in config", mask.key);
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.masks.len(), 4);
        assert_eq!(config.masks[0].key, "ru");
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_masks() {
        let mut config = Config::new();
        config.masks.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_duplicate_keys() {
        let mut config = Config::new();
        let duplicate = config.masks[0].clone();
        config.masks.push(duplicate);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_bad_mask_field() {
        let mut config = Config::new();
        config.masks[0].prefix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let config = Config::new();

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(Config::load_from(&missing).is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // A config file carrying only UI preferences still gets the
        // built-in mask set via serde defaults.
        let config: Config = toml::from_str("[ui]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(config.masks.len(), 4);
    }
}
