//! Test utilities and fixtures for survey parser testing
//!
//! This module provides report fixtures in both historical layouts and
//! helper functions used across the test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;

/// Complete report in the tab-delimited (strict) layout
pub fn create_strict_report() -> String {
    "Customer\tAcme Drilling
Creation Date\t3/4/2024
Project\tNorth Slope Development
Profile Type\tBuild and Hold
Field\tPrudhoe Bay
Your Ref\tAD-2024-117
Structure\tPlatform A
Job Number\tJ-5521
Wellhead\tA-12
Kelly Bushing Elev.\t82.3
Profile\tPrimary wellpath
Print Date\t3/15/2024
MD\tIncl\tAzim\tSubSea\tTVD\tLocalNCoord\tLocalECoord\tGlobalNCoord\tGlobalECoord\tDogleg\tVerticalSection
0.0 0.0 0.0 -82.3 0.0 0.0 0.0 0.0 0.0 0.0 0.0
1000.0 12.5 45.0 980.0 990.0 10.1 20.2 30.3 40.4 1.2 5.5
2000.0 25.0 47.5 1860.0 1880.0 150.7 170.3 220.4 240.1 1.5 210.9
"
    .to_string()
}

/// Complete report in the free-text prefix (lenient) layout
pub fn create_lenient_report() -> String {
    "Directional Survey Plan
Customer: Acme Drilling
Project: North Slope Development
Field: Prudhoe Bay
Wellhead: A-12
Job Number: J-5521
MD Incl Azim SubSea TVD LocalNCoord LocalECoord GlobalNCoord GlobalECoord Dogleg VerticalSection
0.0 0.0 0.0 -82.3 0.0 0.0 0.0 0.0 0.0 0.0 0.0
1000.0 12.5 45.0 980.0 990.0 10.1 20.2 30.3 40.4 1.2 5.5
"
    .to_string()
}

/// Minimal strict-layout report: one header field, one data row
pub fn create_minimal_report() -> String {
    "Customer\tAcme Drilling
MD
1000.0 12.5 45.0 980.0 990.0 10.1 20.2 30.3 40.4 1.2 5.5
"
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
