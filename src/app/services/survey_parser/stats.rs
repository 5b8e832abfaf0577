//! Parsing statistics and result structures for survey report processing
//!
//! The statistics are a diagnostic side channel: they never influence the
//! trajectory's field values, which depend only on the source text and the
//! selected profile.

use serde::{Deserialize, Serialize};

use crate::app::models::Trajectory;
use crate::constants::MAX_RECORDED_ERRORS;

/// Parsing result with the assembled trajectory and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed trajectory (header plus ordered stations)
    pub trajectory: Trajectory,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of data-section lines encountered
    pub total_records: usize,

    /// Number of stations successfully parsed
    pub stations_parsed: usize,

    /// Number of data-section lines rejected
    pub records_skipped: usize,

    /// Number of individual fields defaulted to zero (lenient profile only)
    pub fields_defaulted: usize,

    /// Per-row diagnostics, capped at [`MAX_RECORDED_ERRORS`]
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            stations_parsed: 0,
            records_skipped: 0,
            fields_defaulted: 0,
            errors: Vec::new(),
        }
    }

    /// Record a per-row diagnostic, dropping it once the cap is reached
    pub fn record_error(&mut self, message: String) {
        if self.errors.len() < MAX_RECORDED_ERRORS {
            self.errors.push(message);
        }
    }

    /// Calculate success rate as a percentage of data-section lines
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.stations_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
