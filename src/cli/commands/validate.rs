//! Validate command implementation for the survey processor CLI
//!
//! Sweeps a directory of survey reports, parses every file with the chosen
//! profile, and reports aggregate statistics so problem files surface before
//! the trajectories are handed downstream.

use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;
use futures::StreamExt;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::shared::{ProcessingStats, create_progress_bar, is_critical_error, setup_logging};
use crate::app::services::report_scanner::discover_report_files;
use crate::app::services::survey_parser::SurveyParser;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Per-file outcome retained for the aggregate report
#[derive(Debug, Clone, Serialize)]
struct FileReport {
    path: PathBuf,
    parsed: bool,
    stations_parsed: usize,
    total_records: usize,
    records_skipped: usize,
    fields_defaulted: usize,
    success_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Aggregate validation results across all files
#[derive(Debug, Clone, Serialize)]
struct ValidationSummary {
    profile: String,
    files_processed: usize,
    files_failed: usize,
    stations_parsed: usize,
    total_records: usize,
    records_skipped: usize,
    fields_defaulted: usize,
    processing_time_seconds: f64,
    files: Vec<FileReport>,
}

impl ValidationSummary {
    /// Success rate across every data line in the sweep
    fn record_success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.stations_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    fn success(&self) -> bool {
        self.files_failed == 0
    }
}

/// Validate command runner
pub async fn run_validate(
    args: ValidateArgs,
    cancel: CancellationToken,
) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    let mut config = Config::from_env()
        .with_input_path(args.input_path.clone())
        .with_profile(args.profile)
        .with_max_files(args.max_files);
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    if args.continue_on_error {
        config = config.with_continue_on_error();
    }
    config.validate()?;

    info!("Validating survey reports in {}", config.input_path.display());

    let mut files = discover_report_files(&config.input_path)?;
    if let Some(max_files) = config.max_files {
        if files.len() > max_files {
            info!(
                "Limiting run to {} of {} discovered reports",
                max_files,
                files.len()
            );
            files.truncate(max_files);
        }
    }

    if files.is_empty() {
        warn!(
            "No survey report files found in {}",
            config.input_path.display()
        );
    }

    let progress = if args.show_progress() {
        Some(create_progress_bar(
            files.len() as u64,
            "Parsing survey reports",
        ))
    } else {
        None
    };

    let parser = SurveyParser::new(config.profile);
    let mut outcomes = futures::stream::iter(files.into_iter().map(|path| {
        let cancel = cancel.clone();
        async move {
            let outcome = parser.parse_file_with_cancellation(&path, &cancel).await;
            (path, outcome)
        }
    }))
    .buffer_unordered(config.workers);

    let mut reports = Vec::new();
    while let Some((path, outcome)) = outcomes.next().await {
        if let Some(pb) = &progress {
            pb.inc(1);
        }

        match outcome {
            Ok(result) => {
                reports.push(FileReport {
                    path,
                    parsed: true,
                    stations_parsed: result.stats.stations_parsed,
                    total_records: result.stats.total_records,
                    records_skipped: result.stats.records_skipped,
                    fields_defaulted: result.stats.fields_defaulted,
                    success_rate: result.stats.success_rate(),
                    error: None,
                });
            }
            Err(e) => {
                if is_critical_error(&e) || !config.continue_on_error {
                    if let Some(pb) = &progress {
                        pb.abandon_with_message("Validation aborted");
                    }
                    return Err(e);
                }
                warn!("Failed to parse {}: {}", path.display(), e);
                reports.push(FileReport {
                    path,
                    parsed: false,
                    stations_parsed: 0,
                    total_records: 0,
                    records_skipped: 0,
                    fields_defaulted: 0,
                    success_rate: 0.0,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_with_message("Validation complete");
    }

    // Deterministic report order regardless of completion order
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    let summary = ValidationSummary {
        profile: config.profile.to_string(),
        files_processed: reports.iter().filter(|r| r.parsed).count(),
        files_failed: reports.iter().filter(|r| !r.parsed).count(),
        stations_parsed: reports.iter().map(|r| r.stations_parsed).sum(),
        total_records: reports.iter().map(|r| r.total_records).sum(),
        records_skipped: reports.iter().map(|r| r.records_skipped).sum(),
        fields_defaulted: reports.iter().map(|r| r.fields_defaulted).sum(),
        processing_time_seconds: start_time.elapsed().as_secs_f64(),
        files: reports,
    };

    match args.output_format {
        OutputFormat::Human => print_human_report(&summary),
        OutputFormat::Json => print_json_report(&summary)?,
        OutputFormat::Csv => print_csv_report(&summary),
    }

    info!(
        "Validation completed in {:.2}s: {} files processed, {:.1}% record success rate",
        summary.processing_time_seconds,
        summary.files_processed,
        summary.record_success_rate()
    );

    Ok(ProcessingStats {
        files_processed: summary.files_processed,
        files_failed: summary.files_failed,
        stations_parsed: summary.stations_parsed,
        rows_skipped: summary.records_skipped,
        fields_defaulted: summary.fields_defaulted,
        processing_time: start_time.elapsed(),
    })
}

/// Print a human-readable validation report
fn print_human_report(summary: &ValidationSummary) {
    println!();
    println!("{}", "Survey Report Validation Results".bold());
    println!("{}", "=".repeat(50));

    if summary.success() {
        println!("Overall status: {}", "PASS".green().bold());
    } else {
        println!("Overall status: {}", "FAIL".red().bold());
    }

    println!();
    println!("{}", "Summary".bold());
    println!(
        "   Files:     {} processed, {} failed ({} profile)",
        summary.files_processed, summary.files_failed, summary.profile
    );
    println!(
        "   Stations:  {} parsed from {} data lines ({:.1}% success)",
        summary.stations_parsed,
        summary.total_records,
        summary.record_success_rate()
    );
    if summary.records_skipped > 0 {
        println!(
            "   Skipped:   {} rows",
            summary.records_skipped.to_string().yellow()
        );
    }
    if summary.fields_defaulted > 0 {
        println!(
            "   Defaulted: {} fields substituted with 0",
            summary.fields_defaulted.to_string().yellow()
        );
    }
    println!(
        "   Time:      {:.2}s",
        summary.processing_time_seconds
    );

    let failed: Vec<_> = summary.files.iter().filter(|f| !f.parsed).collect();
    if !failed.is_empty() {
        println!();
        println!("{}", "Failed files:".red().bold());
        for file in failed.iter().take(5) {
            println!(
                "   {}: {}",
                file.path.display(),
                file.error.as_deref().unwrap_or("unknown error")
            );
        }
        if failed.len() > 5 {
            println!("   ... and {} more", failed.len() - 5);
        }
    }

    let low_success: Vec<_> = summary
        .files
        .iter()
        .filter(|f| f.parsed && f.total_records > 0 && f.success_rate < 80.0)
        .collect();
    if !low_success.is_empty() {
        println!();
        println!("{}", "Files with low success rate (<80%):".yellow().bold());
        for file in low_success.iter().take(5) {
            println!(
                "   {}: {:.1}% ({} of {} rows skipped)",
                file.path.display(),
                file.success_rate,
                file.records_skipped,
                file.total_records
            );
        }
        if low_success.len() > 5 {
            println!("   ... and {} more", low_success.len() - 5);
        }
    }

    println!();
}

/// Print the validation summary as JSON
fn print_json_report(summary: &ValidationSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(|e| {
        Error::configuration(format!("Failed to serialize validation summary: {}", e))
    })?;

    println!("{}", json);
    Ok(())
}

/// Print the validation summary as CSV
fn print_csv_report(summary: &ValidationSummary) {
    println!("metric,value");
    println!("overall_success,{}", summary.success());
    println!("profile,{}", summary.profile);
    println!("files_processed,{}", summary.files_processed);
    println!("files_failed,{}", summary.files_failed);
    println!("stations_parsed,{}", summary.stations_parsed);
    println!("total_records,{}", summary.total_records);
    println!("records_skipped,{}", summary.records_skipped);
    println!("fields_defaulted,{}", summary.fields_defaulted);
    println!(
        "record_success_rate_percent,{:.2}",
        summary.record_success_rate()
    );
    println!(
        "processing_time_seconds,{:.2}",
        summary.processing_time_seconds
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_report(parsed: bool, stations: usize, total: usize) -> FileReport {
        FileReport {
            path: PathBuf::from("plan.txt"),
            parsed,
            stations_parsed: stations,
            total_records: total,
            records_skipped: total - stations,
            fields_defaulted: 0,
            success_rate: if total == 0 {
                0.0
            } else {
                (stations as f64 / total as f64) * 100.0
            },
            error: if parsed {
                None
            } else {
                Some("unreadable".to_string())
            },
        }
    }

    #[test]
    fn test_summary_success_rate() {
        let summary = ValidationSummary {
            profile: "strict".to_string(),
            files_processed: 2,
            files_failed: 0,
            stations_parsed: 9,
            total_records: 10,
            records_skipped: 1,
            fields_defaulted: 0,
            processing_time_seconds: 0.1,
            files: vec![file_report(true, 5, 5), file_report(true, 4, 5)],
        };

        assert!(summary.success());
        assert_eq!(summary.record_success_rate(), 90.0);
    }

    #[test]
    fn test_summary_failure() {
        let summary = ValidationSummary {
            profile: "strict".to_string(),
            files_processed: 0,
            files_failed: 1,
            stations_parsed: 0,
            total_records: 0,
            records_skipped: 0,
            fields_defaulted: 0,
            processing_time_seconds: 0.0,
            files: vec![file_report(false, 0, 0)],
        };

        assert!(!summary.success());
        assert_eq!(summary.record_success_rate(), 0.0);
    }
}
