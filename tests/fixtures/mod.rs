//! Shared test fixtures for engine and E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use phoneform::config::Config;
use phoneform::models::CountryMask;

/// The standard four-country mask set used across the test suite.
pub fn test_masks() -> Vec<CountryMask> {
    vec![
        ru_mask(),
        us_mask(),
        CountryMask::new("uk", "United Kingdom", "🇬🇧", "+44", "**** **** ****").unwrap(),
        CountryMask::new("de", "Germany", "🇩🇪", "+49", "*** / **** - ****").unwrap(),
    ]
}

/// Ten-cell Russian mask, prefix +7.
pub fn ru_mask() -> CountryMask {
    CountryMask::new("ru", "Russia", "🇷🇺", "+7", "(***) - *** - ** - **").unwrap()
}

/// Ten-cell US mask, prefix +1.
pub fn us_mask() -> CountryMask {
    CountryMask::new("us", "United States", "🇺🇸", "+1", "(***) *** - ****").unwrap()
}

/// Six-cell mask for truncation scenarios.
pub fn short_mask() -> CountryMask {
    CountryMask::new("short", "Shortland", "", "+99", "*** - ***").unwrap()
}

/// Writes a config file holding the given masks into a temp dir.
///
/// Returns the config path and the guard keeping the directory alive.
pub fn create_temp_config(masks: &[CountryMask]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let config = Config {
        masks: masks.to_vec(),
        ..Config::default()
    };
    let content = toml::to_string_pretty(&config).expect("Failed to serialize config");
    fs::write(&config_path, content).expect("Failed to write config");

    (config_path, temp_dir)
}
