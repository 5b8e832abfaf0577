//! Application constants for the survey processor
//!
//! This module contains the report layout markers, header field dictionaries,
//! format strings, and default values used throughout the application.

// =============================================================================
// Report Layout Constants
// =============================================================================

/// First token of the column-title line that opens the data section.
/// Once seen, the parser never returns to header mode for that file.
pub const DATA_SECTION_MARKER: &str = "MD";

/// Number of numeric columns in one survey station row
pub const STATION_FIELD_COUNT: usize = 11;

/// Station column titles in report order
pub const STATION_COLUMNS: &[&str; STATION_FIELD_COUNT] = &[
    "MD",
    "Incl",
    "Azim",
    "SubSea",
    "TVD",
    "LocalNCoord",
    "LocalECoord",
    "GlobalNCoord",
    "GlobalECoord",
    "Dogleg",
    "VerticalSection",
];

/// Date pattern used in survey report headers (M/D/YYYY, no zero padding
/// required; chrono accepts one- or two-digit month and day here)
pub const SURVEY_DATE_FORMAT: &str = "%m/%d/%Y";

/// File extensions considered survey reports during directory discovery
pub const REPORT_FILE_EXTENSIONS: &[&str] = &["txt", "rpt"];

// =============================================================================
// Header Field Dictionaries
// =============================================================================

/// Recognized header keys in the tab-delimited layout
pub mod header_keys {
    pub const CUSTOMER: &str = "Customer";
    pub const CREATION_DATE: &str = "Creation Date";
    pub const PROJECT: &str = "Project";
    pub const PROFILE_TYPE: &str = "Profile Type";
    pub const FIELD: &str = "Field";
    pub const YOUR_REF: &str = "Your Ref";
    pub const STRUCTURE: &str = "Structure";
    pub const JOB_NUMBER: &str = "Job Number";
    pub const WELLHEAD: &str = "Wellhead";
    pub const KELLY_BUSHING_ELEV: &str = "Kelly Bushing Elev.";
    pub const PROFILE: &str = "Profile";
    pub const PRINT_DATE: &str = "Print Date";

    /// All recognized tab-delimited header keys
    pub const ALL: &[&str] = &[
        CUSTOMER,
        CREATION_DATE,
        PROJECT,
        PROFILE_TYPE,
        FIELD,
        YOUR_REF,
        STRUCTURE,
        JOB_NUMBER,
        WELLHEAD,
        KELLY_BUSHING_ELEV,
        PROFILE,
        PRINT_DATE,
    ];
}

/// Recognized `Key:` prefixes in the free-text header layout.
///
/// This set is a strict subset of [`header_keys::ALL`]: the historical
/// prefix layout only ever wired these five fields.
pub mod header_prefixes {
    pub const CUSTOMER: &str = "Customer:";
    pub const PROJECT: &str = "Project:";
    pub const FIELD: &str = "Field:";
    pub const WELLHEAD: &str = "Wellhead:";
    pub const JOB_NUMBER: &str = "Job Number:";

    /// All recognized header prefixes
    pub const ALL: &[&str] = &[CUSTOMER, PROJECT, FIELD, WELLHEAD, JOB_NUMBER];
}

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default number of reports parsed concurrently by the validate command
pub const DEFAULT_PARALLEL_WORKERS: usize = 8;

/// Maximum number of per-row diagnostics retained in parse statistics
pub const MAX_RECORDED_ERRORS: usize = 100;

/// Environment variable overriding the default log level
pub const LOG_LEVEL_ENV_VAR: &str = "SURVEY_PROCESSOR_LOG";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a file name looks like a survey report
pub fn is_report_file_name(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            REPORT_FILE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_set_is_subset_of_key_set() {
        for prefix in header_prefixes::ALL {
            let key = prefix.trim_end_matches(':');
            assert!(
                header_keys::ALL.contains(&key),
                "prefix '{}' has no tab-layout counterpart",
                prefix
            );
        }
        assert!(header_prefixes::ALL.len() < header_keys::ALL.len());
    }

    #[test]
    fn test_report_file_name_detection() {
        assert!(is_report_file_name("well-a12.txt"));
        assert!(is_report_file_name("PLAN_FINAL.RPT"));
        assert!(!is_report_file_name("trajectory.csv"));
        assert!(!is_report_file_name("notes"));
    }
}
