//! CLI command handlers for PhoneForm.
//!
//! This module provides headless, scriptable access to the mask engine
//! for automation, testing, and shell pipelines.

pub mod common;
pub mod extract;
pub mod format;
pub mod masks;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use extract::ExtractArgs;
pub use format::FormatArgs;
pub use masks::MasksArgs;
