//! Command implementations for the survey processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod parse;
pub mod shared;
pub mod validate;

// Re-export the main types for easy access
pub use shared::ProcessingStats;

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner for the survey processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `parse`: single-report parsing with trajectory output
/// - `validate`: directory sweep with aggregate statistics
///
/// The cancellation token is threaded down to the parser so a ctrl-c
/// interrupts between lines rather than after the whole file.
pub async fn run(command: Commands, cancel: CancellationToken) -> Result<ProcessingStats> {
    match command {
        Commands::Parse(parse_args) => parse::run_parse(parse_args, cancel).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args, cancel).await,
    }
}
