//! PhoneForm - Terminal masked phone number entry
//!
//! Interactive widget for entering phone numbers cell by cell under
//! per-country masks, with headless subcommands for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use phoneform::cli::{ExtractArgs, FormatArgs, MasksArgs};
use phoneform::config::Config;
use phoneform::constants::APP_BINARY_NAME;
use phoneform::tui;

/// PhoneForm - Terminal masked phone number entry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial phone value (formatted or bare digits)
    #[arg(value_name = "VALUE")]
    value: Option<String>,

    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List configured country masks
    Masks(MasksArgs),
    /// Format digits under a mask
    Format(FormatArgs),
    /// Extract digits from a raw value
    Extract(ExtractArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let result = match command {
            Commands::Masks(args) => args.execute(),
            Commands::Format(args) => args.execute(),
            Commands::Extract(args) => args.execute(),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    // No subcommand: run the interactive widget
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: {e}");
            eprintln!("Falling back to the built-in mask set.");
            eprintln!("Run `{} masks` to inspect it.", APP_BINARY_NAME);
            Config::default()
        }),
    };
    config.validate()?;

    let mut app = tui::App::new(&config, cli.value.as_deref().unwrap_or(""))?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app, &mut terminal);
    tui::restore_terminal(terminal)?;
    result?;

    // Hand the final value to the shell
    println!("{}", app.value());

    Ok(())
}
