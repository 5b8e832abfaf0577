//! Command-line argument definitions for the survey processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::services::survey_parser::ParserProfile;

/// CLI arguments for the directional-survey trajectory processor
///
/// Parses industry-standard wellbore survey reports (a key/value header
/// block followed by a tabular station block) into validated trajectory
/// records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "survey-processor",
    version,
    about = "Parse directional-survey wellbore trajectory reports into typed trajectory records",
    long_about = "A production tool that parses directional-survey trajectory reports into \
                  validated, strongly-typed trajectory records. Supports the two historical \
                  report layouts via explicit parser profiles, recovers from malformed rows \
                  with per-file statistics, and can sweep whole directories of reports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the survey processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a single survey report and print the trajectory
    Parse(ParseArgs),
    /// Parse every report under a directory and print aggregate statistics
    Validate(ValidateArgs),
}

/// Output formats for command reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON on stdout
    Json,
    /// CSV on stdout
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Human => "human",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Arguments for the parse command (single report)
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Path to the survey report file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Path to the survey report file"
    )]
    pub input_path: PathBuf,

    /// Report layout profile
    ///
    /// The two historical layouts carry no marker a parser could detect,
    /// so the caller picks one explicitly: `strict` for tab-delimited
    /// headers with fixed-template rows, `lenient` for free-text header
    /// prefixes with whitespace-split rows.
    #[arg(
        short = 'p',
        long = "profile",
        value_enum,
        default_value_t = ParserProfile::Strict,
        help = "Report layout profile (strict or lenient)"
    )]
    pub profile: ParserProfile,

    /// Output format for the parsed trajectory
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Human,
        help = "Output format (human, json, or csv)"
    )]
    pub output_format: OutputFormat,

    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log warnings and errors"
    )]
    pub quiet: bool,
}

impl ParseArgs {
    /// Resolve the effective log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Arguments for the validate command (directory sweep)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Directory containing survey report files
    ///
    /// Searched recursively for files with a report extension (.txt, .rpt).
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Directory containing survey report files"
    )]
    pub input_path: PathBuf,

    /// Report layout profile applied to every file
    #[arg(
        short = 'p',
        long = "profile",
        value_enum,
        default_value_t = ParserProfile::Strict,
        help = "Report layout profile (strict or lenient)"
    )]
    pub profile: ParserProfile,

    /// Number of reports parsed concurrently
    #[arg(
        short = 'w',
        long = "workers",
        value_name = "COUNT",
        help = "Number of reports parsed concurrently"
    )]
    pub workers: Option<usize>,

    /// Maximum number of files to process
    #[arg(
        long = "max-files",
        value_name = "COUNT",
        help = "Maximum number of files to process"
    )]
    pub max_files: Option<usize>,

    /// Keep going when a file fails to parse entirely
    #[arg(
        long = "continue-on-error",
        help = "Keep going when a file fails to parse entirely"
    )]
    pub continue_on_error: bool,

    /// Output format for the aggregate report
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Human,
        help = "Output format (human, json, or csv)"
    )]
    pub output_format: OutputFormat,

    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log warnings and errors"
    )]
    pub quiet: bool,
}

impl ValidateArgs {
    /// Resolve the effective log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Whether the interactive progress bar should be shown
    pub fn show_progress(&self) -> bool {
        self.output_format == OutputFormat::Human && !self.quiet
    }
}
