//! Format a digit string under a configured mask.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{find_mask, load_config, CliError, CliResult};
use crate::parser::{format_phone, normalize_digits, parse_mask};

/// Format digits under a country mask (e.g. `--mask ru --digits 1234567890`)
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Digits to format; non-digit characters are stripped first
    #[arg(short, long, value_name = "DIGITS")]
    pub digits: String,

    /// Mask key (see `masks` for the configured keys)
    #[arg(short, long, value_name = "KEY")]
    pub mask: String,

    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FormatResult {
    mask: String,
    digits: String,
    formatted: String,
    complete: bool,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;
        let mask = find_mask(&config, &self.mask)?;

        let cells = parse_mask(&mask.pattern).input_count;
        // The formatter ignores overflow, but report what it actually used
        let digits: String = normalize_digits(&self.digits).chars().take(cells).collect();

        let result = FormatResult {
            mask: mask.key.clone(),
            formatted: format_phone(&digits, mask),
            complete: digits.chars().count() == cells,
            digits,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Mask:      {} ({})", result.mask, mask.pattern);
            println!("Digits:    {}", result.digits);
            println!("Formatted: {}", result.formatted);
            if result.complete {
                println!("Status:    ✓ Complete");
            } else {
                println!("Status:    {} of {} digits", result.digits.chars().count(), cells);
            }
        }

        Ok(())
    }
}
