//! Survey report file discovery
//!
//! Walks a directory tree and collects the files that look like survey
//! reports, sorted for a deterministic processing order.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::constants::is_report_file_name;
use crate::{Error, Result};

/// Discover survey report files under a directory, recursively.
///
/// Only file names with a recognized report extension are returned; the
/// result is sorted so repeated runs process files in the same order.
pub fn discover_report_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.exists() {
        return Err(Error::configuration(format!(
            "Input path does not exist: {}",
            input_dir.display()
        )));
    }

    let mut report_files = Vec::new();

    for entry in WalkDir::new(input_dir).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .map(is_report_file_name)
                .unwrap_or(false)
        {
            report_files.push(path.to_path_buf());
        }
    }

    report_files.sort();

    debug!(
        "Discovered {} survey report files in {}",
        report_files.len(),
        input_dir.display()
    );
    for file in &report_files {
        debug!("  Found: {}", file.display());
    }

    Ok(report_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_report_files_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = discover_report_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_report_files_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("b_plan.txt"), "MD\n").unwrap();
        fs::write(temp_dir.path().join("a_plan.rpt"), "MD\n").unwrap();
        fs::write(temp_dir.path().join("nested/c_plan.txt"), "MD\n").unwrap();
        fs::write(temp_dir.path().join("ignore.csv"), "x\n").unwrap();

        let files = discover_report_files(temp_dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a_plan.rpt", "b_plan.txt", "c_plan.txt"]);
    }

    #[test]
    fn test_discover_report_files_missing_directory() {
        let result = discover_report_files(Path::new("/nonexistent/survey/reports"));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
