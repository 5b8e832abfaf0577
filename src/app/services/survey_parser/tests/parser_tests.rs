//! Tests for the main survey parser orchestration

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

use super::super::parser::SurveyParser;
use super::super::profile::ParserProfile;
use super::{create_lenient_report, create_minimal_report, create_strict_report, create_temp_file};
use crate::Error;

fn parse_strict(content: &str) -> crate::app::services::survey_parser::ParseResult {
    SurveyParser::new(ParserProfile::Strict)
        .parse_content(content, &CancellationToken::new())
        .unwrap()
}

fn parse_lenient(content: &str) -> crate::app::services::survey_parser::ParseResult {
    SurveyParser::new(ParserProfile::Lenient)
        .parse_content(content, &CancellationToken::new())
        .unwrap()
}

#[test]
fn test_strict_report_end_to_end() {
    let result = parse_strict(&create_strict_report());

    let header = &result.trajectory.header;
    assert_eq!(header.customer, "Acme Drilling");
    assert_eq!(
        header.creation_date,
        Some(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
    );
    assert_eq!(header.kelly_bushing_elev, 82.3);

    assert_eq!(result.trajectory.station_count(), 3);
    assert_eq!(result.stats.total_records, 3);
    assert_eq!(result.stats.stations_parsed, 3);
    assert_eq!(result.stats.records_skipped, 0);
    assert!(result.trajectory.md_is_ascending());
    assert_eq!(result.trajectory.final_md(), Some(2000.0));
}

#[test]
fn test_worked_example_scenario() {
    let content = "Customer\tAcme Drilling
Creation Date\t3/4/2024
MD\tIncl\tAzim
1000.0 12.5 45.0 980.0 990.0 10.1 20.2 30.3 40.4 1.2 5.5
";
    let result = parse_strict(content);

    assert_eq!(result.trajectory.header.customer, "Acme Drilling");
    assert_eq!(
        result.trajectory.header.creation_date,
        Some(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
    );
    assert_eq!(result.trajectory.station_count(), 1);
    assert_eq!(result.trajectory.stations[0].md, 1000.0);
    assert_eq!(result.trajectory.stations[0].vertical_section, 5.5);
}

#[test]
fn test_lenient_report_end_to_end() {
    let result = parse_lenient(&create_lenient_report());

    let header = &result.trajectory.header;
    assert_eq!(header.customer, "Acme Drilling");
    assert_eq!(header.project, "North Slope Development");
    assert_eq!(header.wellhead, "A-12");
    // Dates are not wired through the prefix layout
    assert_eq!(header.creation_date, None);

    assert_eq!(result.trajectory.station_count(), 2);
    assert_eq!(result.stats.records_skipped, 0);
}

#[test]
fn test_parse_is_idempotent() {
    let content = create_strict_report();
    let first = parse_strict(&content);
    let second = parse_strict(&content);

    assert_eq!(first.trajectory, second.trajectory);
    assert_eq!(first.stats.stations_parsed, second.stats.stations_parsed);
    assert_eq!(first.stats.records_skipped, second.stats.records_skipped);
}

#[test]
fn test_mode_transition_is_one_way() {
    // A header-looking line after the MD marker must never merge into the
    // header; it is a (failing) data row instead
    let content = "Customer\tAcme Drilling
MD
1000.0 12.5 45.0 980.0 990.0 10.1 20.2 30.3 40.4 1.2 5.5
Customer\tEvil Corp
2000.0 25.0 47.5 1860.0 1880.0 150.7 170.3 220.4 240.1 1.5 210.9
";
    let result = parse_strict(content);

    assert_eq!(result.trajectory.header.customer, "Acme Drilling");
    assert_eq!(result.trajectory.station_count(), 2);
    assert_eq!(result.stats.total_records, 3);
    assert_eq!(result.stats.records_skipped, 1);
}

#[test]
fn test_marker_requires_md_as_first_token() {
    // "MDX" must not open the data section
    let content = "MDX something
Customer\tAcme Drilling
";
    let result = parse_strict(content);
    assert_eq!(result.trajectory.header.customer, "Acme Drilling");
    assert_eq!(result.stats.total_records, 0);

    // Leading whitespace before the marker token is fine
    let content = "   MD Incl Azim
1000.0 12.5 45.0 980.0 990.0 10.1 20.2 30.3 40.4 1.2 5.5
";
    let result = parse_strict(content);
    assert_eq!(result.trajectory.station_count(), 1);
}

#[test]
fn test_strict_row_count_monotonicity() {
    let content = "MD
1000.0 12.5 45.0 980.0 990.0 10.1 20.2 30.3 40.4 1.2 5.5
this row is broken
2000.0 25.0 47.5 1860.0 1880.0 150.7 170.3 220.4 240.1 1.5 210.9

3000.0 30.0 50.0 2700.0 2750.0 300.0 350.0 400.0 450.0 2.0 500.0
";
    let result = parse_strict(content);

    assert_eq!(result.stats.total_records, 5);
    assert_eq!(result.stats.stations_parsed, 3);
    assert_eq!(result.stats.records_skipped, 2);
    assert!(result.trajectory.station_count() <= result.stats.total_records);
    assert_eq!(result.stats.errors.len(), 2);
}

#[test]
fn test_rows_keep_file_order() {
    // Out-of-order measured depths are preserved, not re-sorted
    let content = "MD
2000.0 25.0 47.5 1860.0 1880.0 150.7 170.3 220.4 240.1 1.5 210.9
1000.0 12.5 45.0 980.0 990.0 10.1 20.2 30.3 40.4 1.2 5.5
";
    let result = parse_strict(content);

    assert_eq!(result.trajectory.stations[0].md, 2000.0);
    assert_eq!(result.trajectory.stations[1].md, 1000.0);
    assert!(!result.trajectory.md_is_ascending());
}

#[test]
fn test_empty_input_is_valid() {
    let result = parse_strict("");

    assert!(result.trajectory.header.is_empty());
    assert!(result.trajectory.is_empty());
    assert_eq!(result.stats.total_records, 0);
}

#[test]
fn test_header_only_input_is_valid() {
    let result = parse_strict("Customer\tAcme Drilling\n");

    assert_eq!(result.trajectory.header.customer, "Acme Drilling");
    assert!(result.trajectory.is_empty());
}

#[test]
fn test_cancellation_interrupts_parse() {
    let token = CancellationToken::new();
    token.cancel();

    let parser = SurveyParser::new(ParserProfile::Strict);
    let result = parser.parse_content(&create_strict_report(), &token);

    assert!(matches!(result, Err(Error::ProcessingInterrupted { .. })));
}

#[tokio::test]
async fn test_parse_file_round_trip() {
    let temp_file = create_temp_file(&create_minimal_report());

    let parser = SurveyParser::new(ParserProfile::Strict);
    let result = parser.parse_file(temp_file.path()).await.unwrap();

    assert_eq!(result.trajectory.header.customer, "Acme Drilling");
    assert_eq!(result.trajectory.station_count(), 1);
}

#[tokio::test]
async fn test_parse_file_missing_path() {
    let parser = SurveyParser::new(ParserProfile::Strict);
    let result = parser
        .parse_file(std::path::Path::new("/nonexistent/plan.txt"))
        .await;

    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}
