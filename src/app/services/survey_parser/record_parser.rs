//! Individual station row parsing for survey report data sections
//!
//! Two tokenizations exist, bound to the parser profiles. The strict layout
//! matches the line against a fixed template of eleven space-separated
//! numeric fields and rejects the whole line on any mismatch. The lenient
//! layout splits on whitespace runs, requires exactly eleven tokens, and
//! substitutes zero for any token that fails numeric coercion. The two are
//! deliberately not interchangeable.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::field_parsers::parse_optional_decimal;
use super::profile::ParserProfile;
use crate::app::models::SurveyStation;
use crate::constants::{STATION_COLUMNS, STATION_FIELD_COUNT};
use crate::{Error, Result};

/// Fixed row template for the strict layout: eleven floating-point fields
/// separated by runs of spaces, nothing else on the line.
static STRICT_ROW_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| {
    let float = r"([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)";
    let template = format!(
        r"^\s*{f}\s+{f}\s+{f}\s+{f}\s+{f}\s+{f}\s+{f}\s+{f}\s+{f}\s+{f}\s+{f}\s*$",
        f = float
    );
    Regex::new(&template).expect("strict row template is a valid regex")
});

/// Outcome of parsing one data-section line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedRow {
    /// The fully populated station
    pub station: SurveyStation,

    /// Number of fields substituted with zero (always 0 for the strict
    /// layout, which rejects instead of substituting)
    pub fields_defaulted: usize,
}

/// Parse one data-section line according to the profile
pub fn parse_station_row(line: &str, profile: ParserProfile) -> Result<ParsedRow> {
    match profile {
        ParserProfile::Strict => parse_strict_row(line),
        ParserProfile::Lenient => parse_lenient_row(line),
    }
}

/// Strict layout: the whole line must match the eleven-field template.
///
/// Wrong token count or a non-numeric token rejects the row; no partial
/// station is ever produced.
fn parse_strict_row(line: &str) -> Result<ParsedRow> {
    let captures = STRICT_ROW_TEMPLATE.captures(line).ok_or_else(|| {
        Error::data_validation(format!(
            "Row does not match the {}-field survey template: '{}'",
            STATION_FIELD_COUNT,
            line.trim()
        ))
    })?;

    let mut values = [0.0_f64; STATION_FIELD_COUNT];
    for (index, value) in values.iter_mut().enumerate() {
        let token = captures
            .get(index + 1)
            .map(|group| group.as_str())
            .unwrap_or_default();
        *value = token.parse::<f64>().map_err(|e| {
            Error::data_validation(format!(
                "Invalid {} value '{}' ({})",
                STATION_COLUMNS[index], token, e
            ))
        })?;
    }

    Ok(ParsedRow {
        station: SurveyStation::from_columns(values),
        fields_defaulted: 0,
    })
}

/// Lenient layout: whitespace-split with exactly eleven tokens.
///
/// The token-count gate applies before any per-field coercion; a line with
/// the right shape is always appended, defaulting bad fields to zero.
fn parse_lenient_row(line: &str) -> Result<ParsedRow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != STATION_FIELD_COUNT {
        return Err(Error::data_validation(format!(
            "Expected {} whitespace-separated fields, found {}",
            STATION_FIELD_COUNT,
            tokens.len()
        )));
    }

    let mut values = [0.0_f64; STATION_FIELD_COUNT];
    let mut fields_defaulted = 0;
    for (index, token) in tokens.iter().enumerate() {
        match parse_optional_decimal(token) {
            Some(parsed) => values[index] = parsed,
            None => {
                debug!(
                    "Failed to parse {} value '{}', substituting 0",
                    STATION_COLUMNS[index], token
                );
                fields_defaulted += 1;
            }
        }
    }

    Ok(ParsedRow {
        station: SurveyStation::from_columns(values),
        fields_defaulted,
    })
}
