//! List the configured candidate masks.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::parser::parse_mask;

/// List configured country masks in matching order
#[derive(Debug, Clone, Args)]
pub struct MasksArgs {
    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MaskRow {
    key: String,
    name: String,
    emoji: String,
    prefix: String,
    pattern: String,
    cells: usize,
}

impl MasksArgs {
    /// Execute the masks command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        let rows: Vec<MaskRow> = config
            .masks
            .iter()
            .map(|mask| MaskRow {
                key: mask.key.clone(),
                name: mask.name.clone(),
                emoji: mask.emoji.clone(),
                prefix: mask.prefix.clone(),
                pattern: mask.pattern.clone(),
                cells: parse_mask(&mask.pattern).input_count,
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for row in &rows {
                println!(
                    "{:<6} {:<18} {:<5} {:<22} {} cells",
                    row.key, row.name, row.prefix, row.pattern, row.cells
                );
            }
        }

        Ok(())
    }
}
