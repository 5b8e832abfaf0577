//! Data models for survey processing
//!
//! This module contains the core data structures for representing directional
//! survey metadata and trajectory stations, following the layout of
//! industry-standard wellbore survey reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Survey Header Structure
// =============================================================================

/// Survey metadata extracted from the report header block
///
/// Every field is optional in the source format: absence of a recognized key
/// leaves the field at its default (empty string, `None` date, `0.0`
/// elevation). When a key repeats, the last occurrence wins: the parser
/// overwrites line by line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyHeader {
    /// Customer / operator name
    pub customer: String,

    /// Date the survey plan was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,

    /// Project name
    pub project: String,

    /// Wellbore profile type (e.g. "Build and Hold")
    pub profile_type: String,

    /// Field name
    pub field: String,

    /// Client reference
    pub your_ref: String,

    /// Structure (platform / pad) name
    pub structure: String,

    /// Job number
    pub job_number: String,

    /// Wellhead name
    pub wellhead: String,

    /// Kelly-bushing elevation (length unit implicit in the source report)
    pub kelly_bushing_elev: f64,

    /// Profile description
    pub profile: String,

    /// Date the report was printed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_date: Option<NaiveDate>,
}

impl SurveyHeader {
    /// Check whether any header field was populated from the source
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Survey Station Structure
// =============================================================================

/// One directional-survey station along the wellbore
///
/// A station is either fully populated from a source row or never created:
/// the strict row parser rejects a line outright rather than appending a
/// partial station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyStation {
    /// Measured depth, the distance along the wellbore path
    pub md: f64,

    /// Inclination angle from vertical (degrees)
    pub incl: f64,

    /// Azimuth of the deviation (degrees)
    pub azim: f64,

    /// Sub-sea depth
    pub sub_sea: f64,

    /// True vertical depth below the reference point
    pub tvd: f64,

    /// Local north coordinate
    pub local_n_coord: f64,

    /// Local east coordinate
    pub local_e_coord: f64,

    /// Global north coordinate
    pub global_n_coord: f64,

    /// Global east coordinate
    pub global_e_coord: f64,

    /// Dogleg severity, the rate of direction change per unit length
    pub dogleg: f64,

    /// Vertical section, the horizontal displacement projected onto the
    /// planned azimuth
    pub vertical_section: f64,
}

impl SurveyStation {
    /// Build a station from the eleven column values in report order:
    /// MD, Incl, Azim, SubSea, TVD, LocalNCoord, LocalECoord, GlobalNCoord,
    /// GlobalECoord, Dogleg, VerticalSection.
    pub fn from_columns(values: [f64; 11]) -> Self {
        let [
            md,
            incl,
            azim,
            sub_sea,
            tvd,
            local_n_coord,
            local_e_coord,
            global_n_coord,
            global_e_coord,
            dogleg,
            vertical_section,
        ] = values;

        Self {
            md,
            incl,
            azim,
            sub_sea,
            tvd,
            local_n_coord,
            local_e_coord,
            global_n_coord,
            global_e_coord,
            dogleg,
            vertical_section,
        }
    }
}

// =============================================================================
// Trajectory Structure
// =============================================================================

/// A complete parsed survey: one header plus the ordered station sequence
///
/// Created fresh per parse invocation and treated as an immutable snapshot by
/// downstream consumers. Station order is the source file order (measured
/// depth ascending as emitted by the survey software); the parser never
/// re-sorts or deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Survey metadata from the report header block
    pub header: SurveyHeader,

    /// Survey stations in file order
    pub stations: Vec<SurveyStation>,
}

impl Trajectory {
    /// Number of stations in the trajectory
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Check whether the trajectory holds any stations
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Measured depth of the last station, if any
    pub fn final_md(&self) -> Option<f64> {
        self.stations.last().map(|station| station.md)
    }

    /// Check that measured depth never decreases along the sequence.
    ///
    /// Diagnostic only; the parser preserves file order regardless.
    pub fn md_is_ascending(&self) -> bool {
        self.stations
            .windows(2)
            .all(|pair| pair[0].md <= pair[1].md)
    }
}
