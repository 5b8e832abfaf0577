//! Configuration management and validation
//!
//! Runtime configuration is assembled in layers: built-in defaults, then
//! environment overrides, then explicit CLI arguments. The input location is
//! always an explicit path supplied by the caller; nothing here reaches for
//! a hard-coded filesystem prefix.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::services::survey_parser::ParserProfile;
use crate::constants::{DEFAULT_PARALLEL_WORKERS, LOG_LEVEL_ENV_VAR};
use crate::{Error, Result};

/// Global configuration for survey processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input path: a report file for `parse`, a directory for `validate`
    pub input_path: PathBuf,

    /// Parser profile selecting the report layout
    pub profile: ParserProfile,

    /// Number of reports parsed concurrently by the validate command
    pub workers: usize,

    /// Upper bound on the number of files processed (validate command)
    pub max_files: Option<usize>,

    /// Keep going when a file fails with a fatal error (validate command)
    pub continue_on_error: bool,

    /// Log level name ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            profile: ParserProfile::default(),
            workers: DEFAULT_PARALLEL_WORKERS,
            max_files: None,
            continue_on_error: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration from defaults plus environment overrides.
    ///
    /// CLI argument overrides are applied on top of this by the commands.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var(LOG_LEVEL_ENV_VAR) {
            config.log_level = level;
        }
        if let Ok(workers) = std::env::var("SURVEY_PROCESSOR_WORKERS") {
            if let Ok(parsed) = workers.parse::<usize>() {
                config.workers = parsed;
            }
        }

        debug!("Configuration from environment: {:?}", config);
        config
    }

    /// Set the input path
    pub fn with_input_path(mut self, input_path: PathBuf) -> Self {
        self.input_path = input_path;
        self
    }

    /// Set the parser profile
    pub fn with_profile(mut self, profile: ParserProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Bound the number of files processed
    pub fn with_max_files(mut self, max_files: Option<usize>) -> Self {
        self.max_files = max_files;
        self
    }

    /// Keep going when a file fails
    pub fn with_continue_on_error(mut self) -> Self {
        self.continue_on_error = true;
        self
    }

    /// Validate the assembled configuration
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path must be provided"));
        }

        if self.workers == 0 {
            return Err(Error::configuration(
                "Worker count must be at least 1".to_string(),
            ));
        }

        if self.max_files == Some(0) {
            return Err(Error::configuration(
                "File limit must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }
}
