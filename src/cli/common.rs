//! Shared plumbing for CLI commands: errors, exit codes, config loading.

use std::fmt;
use std::path::Path;

use crate::config::Config;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for scriptable use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown mask key, invalid config contents
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
}

/// Error from a CLI command, carrying its exit code.
#[derive(Debug)]
pub struct CliError {
    message: String,
    code: ExitCode,
}

impl CliError {
    /// An I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::IoError,
        }
    }

    /// A user-input problem.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::ValidationError,
        }
    }

    /// The process exit code to use for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Loads configuration for a command: an explicit `--config` path when
/// given, otherwise the platform config file (or built-in defaults).
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let config = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

    config
        .validate()
        .map_err(|e| CliError::validation(format!("Invalid config: {e}")))?;

    Ok(config)
}

/// Finds a mask by key, with an error listing the available keys.
pub fn find_mask<'a>(
    config: &'a Config,
    key: &str,
) -> CliResult<&'a crate::models::CountryMask> {
    config.masks.iter().find(|mask| mask.key == key).ok_or_else(|| {
        let available: Vec<&str> = config.masks.iter().map(|mask| mask.key.as_str()).collect();
        CliError::validation(format!(
            "Unknown mask key '{}'. Available: {}",
            key,
            available.join(", ")
        ))
    })
}
