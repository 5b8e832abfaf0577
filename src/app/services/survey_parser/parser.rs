//! Core survey report parser implementation
//!
//! This module provides the main parser orchestration: file handling, the
//! header/data section state machine, and coordination between the header
//! and row parsing components.

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::header::merge_header_line;
use super::profile::ParserProfile;
use super::record_parser::parse_station_row;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{SurveyHeader, Trajectory};
use crate::constants::DATA_SECTION_MARKER;
use crate::{Error, Result};

/// Section of the report the scanner is currently in.
///
/// The transition from `Header` to `Data` is one-way for the lifetime of a
/// parse call: once the column-title line is seen, no later line is ever
/// interpreted as header metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Data,
}

/// Directional-survey report parser
///
/// One parser value is cheap to construct and holds only the selected
/// profile; each parse call owns its own trajectory and statistics, so
/// concurrent parses of different inputs are naturally independent.
#[derive(Debug, Clone, Copy)]
pub struct SurveyParser {
    profile: ParserProfile,
}

impl SurveyParser {
    /// Create a new parser for the given layout profile
    pub fn new(profile: ParserProfile) -> Self {
        Self { profile }
    }

    /// The profile this parser was created with
    pub fn profile(&self) -> ParserProfile {
        self.profile
    }

    /// Parse a survey report file and return the trajectory with statistics
    pub async fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        self.parse_file_with_cancellation(file_path, &CancellationToken::new())
            .await
    }

    /// Parse a survey report file, aborting between lines if the token is
    /// cancelled.
    ///
    /// Cancellation yields a [`Error::ProcessingInterrupted`]; no partial
    /// trajectory is returned.
    pub async fn parse_file_with_cancellation(
        &self,
        file_path: &Path,
        cancel: &CancellationToken,
    ) -> Result<ParseResult> {
        info!(
            "Parsing survey report ({} profile): {}",
            self.profile,
            file_path.display()
        );

        // Read file content; the handle is released before parsing begins
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(file_path.display().to_string())
            } else {
                Error::io(format!("Failed to read file {}", file_path.display()), e)
            }
        })?;

        let result = self.parse_content(&content, cancel)?;

        info!(
            "Parsed {} stations from {} data lines ({} skipped)",
            result.stats.stations_parsed, result.stats.total_records, result.stats.records_skipped
        );

        Ok(result)
    }

    /// Parse survey report text from an in-memory buffer.
    ///
    /// This is the whole parse: a single forward scan over the lines,
    /// classifying each against the current section and merging it into the
    /// growing trajectory. Malformed lines are recoverable as described on
    /// the profile; only cancellation aborts.
    pub fn parse_content(
        &self,
        content: &str,
        cancel: &CancellationToken,
    ) -> Result<ParseResult> {
        let mut header = SurveyHeader::default();
        let mut stations = Vec::new();
        let mut stats = ParseStats::new();
        let mut section = Section::Header;

        for (line_index, line) in content.lines().enumerate() {
            if cancel.is_cancelled() {
                return Err(Error::processing_interrupted("survey parse cancelled"));
            }

            match section {
                Section::Header => {
                    if is_data_section_marker(line) {
                        // The column-title row opens the data section and is
                        // itself consumed, never offered to the row parser
                        section = Section::Data;
                        debug!("Data section starts at line {}", line_index + 1);
                    } else {
                        merge_header_line(&mut header, line, self.profile);
                    }
                }
                Section::Data => {
                    stats.total_records += 1;
                    match parse_station_row(line, self.profile) {
                        Ok(parsed) => {
                            stations.push(parsed.station);
                            stats.stations_parsed += 1;
                            stats.fields_defaulted += parsed.fields_defaulted;
                        }
                        Err(e) => {
                            stats.records_skipped += 1;
                            stats.record_error(format!("Line {}: {}", line_index + 1, e));
                            debug!("Skipped data line {}: {}", line_index + 1, e);
                        }
                    }
                }
            }
        }

        if section == Section::Header {
            warn!("No data section marker found; trajectory has no stations");
        }

        Ok(ParseResult {
            trajectory: Trajectory { header, stations },
            stats,
        })
    }
}

/// Check whether a line's first token is the measured-depth column marker
fn is_data_section_marker(line: &str) -> bool {
    line.split_whitespace().next() == Some(DATA_SECTION_MARKER)
}
