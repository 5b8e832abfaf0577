//! Survey report header parsing and metadata extraction
//!
//! A header line carries at most one key/value pair, merged into the
//! in-progress [`SurveyHeader`] in place. Single-line parsing never fails:
//! unrecognized keys are silently ignored and a value that fails coercion
//! leaves the field at its previous value. When a key repeats, the last
//! occurrence wins. Only file-level I/O errors abort a parse.

use super::field_parsers::{parse_decimal, parse_survey_date};
use super::profile::ParserProfile;
use crate::app::models::SurveyHeader;
use crate::constants::{header_keys, header_prefixes};

/// Merge one header-section line into the header, using the layout rules of
/// the given profile.
pub fn merge_header_line(header: &mut SurveyHeader, line: &str, profile: ParserProfile) {
    match profile {
        ParserProfile::Strict => merge_tab_delimited(header, line),
        ParserProfile::Lenient => merge_prefixed(header, line),
    }
}

/// Tab-delimited layout: `key<TAB>value`, both sides trimmed.
///
/// The line must split into exactly two parts; anything else (no tab,
/// multiple tabs) is not a header field and is ignored.
fn merge_tab_delimited(header: &mut SurveyHeader, line: &str) {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() != 2 {
        return;
    }

    let key = parts[0].trim();
    let value = parts[1].trim();

    match key {
        header_keys::CUSTOMER => header.customer = value.to_string(),
        header_keys::CREATION_DATE => {
            if let Ok(date) = parse_survey_date(value) {
                header.creation_date = Some(date);
            }
        }
        header_keys::PROJECT => header.project = value.to_string(),
        header_keys::PROFILE_TYPE => header.profile_type = value.to_string(),
        header_keys::FIELD => header.field = value.to_string(),
        header_keys::YOUR_REF => header.your_ref = value.to_string(),
        header_keys::STRUCTURE => header.structure = value.to_string(),
        header_keys::JOB_NUMBER => header.job_number = value.to_string(),
        header_keys::WELLHEAD => header.wellhead = value.to_string(),
        header_keys::KELLY_BUSHING_ELEV => {
            if let Ok(elevation) = parse_decimal(value) {
                header.kelly_bushing_elev = elevation;
            }
        }
        header_keys::PROFILE => header.profile = value.to_string(),
        header_keys::PRINT_DATE => {
            if let Ok(date) = parse_survey_date(value) {
                header.print_date = Some(date);
            }
        }
        _ => {} // Ignore unrecognized header keys
    }
}

/// Prefix-match layout: the line is tested against the fixed `Key:` prefix
/// set and the trimmed remainder becomes the value.
///
/// Only a subset of the header fields was ever wired through this layout;
/// lines carrying other metadata pass through unrecognized.
fn merge_prefixed(header: &mut SurveyHeader, line: &str) {
    let line = line.trim_start();

    if let Some(rest) = line.strip_prefix(header_prefixes::CUSTOMER) {
        header.customer = rest.trim().to_string();
    } else if let Some(rest) = line.strip_prefix(header_prefixes::PROJECT) {
        header.project = rest.trim().to_string();
    } else if let Some(rest) = line.strip_prefix(header_prefixes::FIELD) {
        header.field = rest.trim().to_string();
    } else if let Some(rest) = line.strip_prefix(header_prefixes::WELLHEAD) {
        header.wellhead = rest.trim().to_string();
    } else if let Some(rest) = line.strip_prefix(header_prefixes::JOB_NUMBER) {
        header.job_number = rest.trim().to_string();
    }
}
