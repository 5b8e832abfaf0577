//! Field coercion utilities for survey report values
//!
//! This module provides helper functions for coercing raw header and row
//! text into typed values with proper error handling.

use chrono::NaiveDate;

use crate::constants::SURVEY_DATE_FORMAT;
use crate::{Error, Result};

/// Parse a survey report date in `M/D/YYYY` form.
///
/// The pattern tolerates unpadded month and day ("3/4/2024" and
/// "03/04/2024" both parse to March 4, 2024).
pub fn parse_survey_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), SURVEY_DATE_FORMAT)
        .map_err(|e| Error::date_parsing(format!("Invalid survey date '{}'", value.trim()), e))
}

/// Parse a decimal header value (e.g. the kelly-bushing elevation)
pub fn parse_decimal(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .map_err(|e| Error::data_validation(format!("Invalid decimal '{}' ({})", trimmed, e)))
}

/// Parse a row token as a decimal, returning `None` on failure.
///
/// Used by the lenient row layout, which tolerates individual bad fields
/// rather than dropping the row.
pub fn parse_optional_decimal(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}
