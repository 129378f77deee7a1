//! Extraction failure report writer.
//!
//! Emits one plain-text block per failed file so archive curators can
//! inspect the headers the cascade could not parse. The report is written
//! only when failures occurred; the pipeline never reads it back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::app::models::ExtractionFailure;
use crate::{Error, Result};

/// Write the failure report, returning whether a file was produced
///
/// No failures means no file: an empty report would read as a truncated
/// run. Each block carries the member path, the issue tag, and the first
/// raw lines of the body.
pub fn write_failure_report(failures: &[ExtractionFailure], path: &Path) -> Result<bool> {
    if failures.is_empty() {
        return Ok(false);
    }

    let file =
        File::create(path).map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);

    for failure in failures {
        writeln!(writer, "File: {}", failure.file_path).map_err(report_io_error)?;
        writeln!(writer, "Issue: {}", failure.issue).map_err(report_io_error)?;
        writeln!(writer, "First 10 lines:").map_err(report_io_error)?;
        for line in &failure.first_lines {
            writeln!(writer, "  {line}").map_err(report_io_error)?;
        }
        writeln!(writer, "{}", "-".repeat(50)).map_err(report_io_error)?;
    }

    info!(
        "wrote {} extraction failures to {}",
        failures.len(),
        path.display()
    );
    Ok(true)
}

fn report_io_error(e: std::io::Error) -> Error {
    Error::io("writing failure report", e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_failures_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failures.txt");
        assert!(!write_failure_report(&[], &path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn blocks_carry_path_issue_and_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failures.txt");
        let lines: Vec<String> = vec!["garbled header".into(), "more noise".into()];
        let failures = vec![
            ExtractionFailure::no_coordinates("net/sta/sm_a.stm", &lines),
            ExtractionFailure::no_coordinates("net/sta/sm_b.stm", &lines),
        ];

        assert!(write_failure_report(&failures, &path).unwrap());
        let report = std::fs::read_to_string(&path).unwrap();
        assert!(report.contains("File: net/sta/sm_a.stm"));
        assert!(report.contains("File: net/sta/sm_b.stm"));
        assert!(report.contains("Issue: no_coordinates_found"));
        assert!(report.contains("  garbled header"));
        assert_eq!(report.matches(&"-".repeat(50)).count(), 2);
    }
}
