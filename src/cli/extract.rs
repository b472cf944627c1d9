//! Recover digits from a raw value, selecting the best-fitting mask.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{find_mask, load_config, CliError, CliResult};
use crate::parser::{extract_digits, parse_mask, select_mask};

/// Extract digits from a raw value (formatted or not) against the mask set
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Raw value: fully formatted, bare digits, or anything in between
    #[arg(short, long, value_name = "VALUE")]
    pub value: String,

    /// Extract against this mask key only instead of auto-selecting
    #[arg(short, long, value_name = "KEY")]
    pub mask: Option<String>,

    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ExtractResult {
    value: String,
    mask: String,
    digits: String,
    complete: bool,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        let (mask, digits) = match &self.mask {
            Some(key) => {
                let mask = find_mask(&config, key)?;
                // Forced mask: raw extraction, no truncation
                (mask, extract_digits(&self.value, &mask.prefix))
            }
            None => {
                let (index, digits) = select_mask(&self.value, &config.masks, 0);
                (&config.masks[index], digits)
            }
        };

        let cells = parse_mask(&mask.pattern).input_count;
        let result = ExtractResult {
            value: self.value.clone(),
            mask: mask.key.clone(),
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
            println!("Value:  {}", result.value);
            println!("Mask:   {}", result.mask);
            println!("Digits: {}", result.digits);
            if result.complete {
                println!("Status: ✓ Complete");
            } else {
                println!("Status: {} of {} digits", result.digits.chars().count(), cells);
            }
        }

        Ok(())
    }
}
