//! Parse command implementation for the survey processor CLI
//!
//! Parses a single survey report and prints the trajectory in the requested
//! output format.

use std::time::Instant;

use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::shared::{ProcessingStats, setup_logging};
use crate::app::services::survey_parser::{ParseResult, SurveyParser};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::constants::STATION_COLUMNS;
use crate::{Error, Result};

/// Parse command runner
pub async fn run_parse(args: ParseArgs, cancel: CancellationToken) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    let config = Config::from_env()
        .with_input_path(args.input_path.clone())
        .with_profile(args.profile);
    config.validate()?;

    let parser = SurveyParser::new(config.profile);
    let result = parser
        .parse_file_with_cancellation(&config.input_path, &cancel)
        .await?;

    match args.output_format {
        OutputFormat::Human => print_human_report(&args, &result),
        OutputFormat::Json => print_json_report(&result)?,
        OutputFormat::Csv => print_csv_report(&result),
    }

    let stats = ProcessingStats {
        files_processed: 1,
        files_failed: 0,
        stations_parsed: result.stats.stations_parsed,
        rows_skipped: result.stats.records_skipped,
        fields_defaulted: result.stats.fields_defaulted,
        processing_time: start_time.elapsed(),
    };

    info!(
        "Parse completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Print a human-readable trajectory summary
fn print_human_report(args: &ParseArgs, result: &ParseResult) {
    let header = &result.trajectory.header;
    let stats = &result.stats;

    println!();
    println!(
        "{} ({} profile)",
        "Survey Trajectory".bold(),
        args.profile
    );
    println!("{}", "=".repeat(50));

    let print_field = |label: &str, value: &str| {
        if !value.is_empty() {
            println!("   {:<22} {}", label, value);
        }
    };

    print_field("Customer:", &header.customer);
    print_field("Project:", &header.project);
    print_field("Field:", &header.field);
    print_field("Structure:", &header.structure);
    print_field("Wellhead:", &header.wellhead);
    print_field("Job number:", &header.job_number);
    print_field("Your ref:", &header.your_ref);
    print_field("Profile:", &header.profile);
    print_field("Profile type:", &header.profile_type);
    if let Some(date) = header.creation_date {
        print_field("Creation date:", &date.format("%Y-%m-%d").to_string());
    }
    if let Some(date) = header.print_date {
        print_field("Print date:", &date.format("%Y-%m-%d").to_string());
    }
    if header.kelly_bushing_elev != 0.0 {
        print_field("Kelly bushing elev.:", &header.kelly_bushing_elev.to_string());
    }

    println!();
    println!("{}", "Stations".bold());
    println!(
        "   Parsed:    {} of {} data lines ({:.1}% success)",
        stats.stations_parsed,
        stats.total_records,
        stats.success_rate()
    );
    if stats.records_skipped > 0 {
        println!(
            "   Skipped:   {}",
            stats.records_skipped.to_string().yellow()
        );
    }
    if stats.fields_defaulted > 0 {
        println!(
            "   Defaulted: {} fields substituted with 0",
            stats.fields_defaulted.to_string().yellow()
        );
    }
    if let Some(final_md) = result.trajectory.final_md() {
        println!("   Final MD:  {:.1}", final_md);
    }
    if !result.trajectory.md_is_ascending() {
        println!(
            "   {}",
            "Warning: measured depth is not ascending in file order".red()
        );
    }

    if !stats.errors.is_empty() {
        println!();
        println!("{}", "Sample diagnostics (first 3):".bold());
        for error in stats.errors.iter().take(3) {
            println!("   {}", error);
        }
    }

    println!();
}

/// Print the trajectory and statistics as JSON
fn print_json_report(result: &ParseResult) -> Result<()> {
    let report = serde_json::json!({
        "trajectory": result.trajectory,
        "stats": result.stats,
    });

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize trajectory: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Print the station table as CSV
fn print_csv_report(result: &ParseResult) {
    println!("{}", STATION_COLUMNS.join(","));
    for station in &result.trajectory.stations {
        println!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            station.md,
            station.incl,
            station.azim,
            station.sub_sea,
            station.tvd,
            station.local_n_coord,
            station.local_e_coord,
            station.global_n_coord,
            station.global_e_coord,
            station.dogleg,
            station.vertical_section
        );
    }
}
