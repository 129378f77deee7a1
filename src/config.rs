//! Configuration for archive processing runs.
//!
//! Small, serde-backed configuration structs with validated defaults.
//! CLI flags override individual fields; nothing here is read from the
//! environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::diagnostics;
use crate::{Error, Result};

/// Settings for one processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Where export files are written (stem directory is created if needed)
    pub output_dir: PathBuf,

    /// Whether to write the extraction failure report
    pub write_failure_report: bool,

    /// File name of the failure report inside `output_dir`
    pub failure_report_name: String,

    /// Quality diagnostic thresholds
    pub quality: QualityConfig,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            write_failure_report: true,
            failure_report_name: "failed_coordinates.txt".to_string(),
            quality: QualityConfig::default(),
        }
    }
}

impl ProcessingConfig {
    /// Validate field consistency
    pub fn validate(&self) -> Result<()> {
        if self.failure_report_name.trim().is_empty() {
            return Err(Error::configuration(
                "failure report name must not be empty",
            ));
        }
        self.quality.validate()
    }

    /// Full path of the failure report
    pub fn failure_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.failure_report_name)
    }
}

/// Thresholds for the advisory coordinate diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Co-located record count above which a location is flagged
    pub repeat_flag_threshold: usize,

    /// Shared-longitude record count above which a vertical line is flagged
    pub vertical_line_threshold: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            repeat_flag_threshold: diagnostics::REPEAT_FLAG_THRESHOLD,
            vertical_line_threshold: diagnostics::VERTICAL_LINE_THRESHOLD,
        }
    }
}

impl QualityConfig {
    pub fn validate(&self) -> Result<()> {
        if self.repeat_flag_threshold == 0 || self.vertical_line_threshold == 0 {
            return Err(Error::configuration(
                "diagnostic thresholds must be positive",
            ));
        }
        Ok(())
    }
}
