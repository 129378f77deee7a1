//! Archive processing pipeline.
//!
//! Drives one sequential run over a distribution archive: member listing,
//! per-member coordinate extraction, record building, and the parallel
//! accumulation of records and failures. Single-file problems are
//! converted to skips and diagnostics at this boundary; only a missing
//! archive aborts the run.

use std::path::Path;

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::app::models::{ExtractionFailure, MemberOutcome, SensorRecord};
use crate::app::services::archive;
use crate::app::services::coordinate_extractor::extract_coordinates;
use crate::app::services::record_builder::{SensorPath, build_record};
use crate::Result;

/// Accumulated state of one processing run
///
/// Both collections are append-only: each archive member contributes at
/// most one entry to one of them, and entries are never revisited during
/// the run. Re-running over the same archive reproduces the same
/// collections in the same order.
#[derive(Debug, Default)]
pub struct ArchiveProcessor {
    /// Successfully extracted sensor records, in archive order
    records: Vec<SensorRecord>,

    /// Extraction failures, in archive order
    failures: Vec<ExtractionFailure>,

    /// Members skipped for having too few path segments
    skipped: usize,

    /// Members abandoned on read errors
    read_errors: usize,
}

impl ArchiveProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process every eligible member of the archive at `zip_path`
    ///
    /// Fatal only when the archive itself is missing or unreadable; any
    /// per-member error is logged, counted, and skipped.
    pub fn process_archive(
        &mut self,
        zip_path: &Path,
        progress: Option<&ProgressBar>,
    ) -> Result<()> {
        let mut zip = archive::open_archive(zip_path)?;
        let members = archive::list_sensor_files(&zip);

        if let Some(bar) = progress {
            bar.set_length(members.len() as u64);
        }

        for member_name in &members {
            match self.process_member(&mut zip, member_name) {
                Ok(MemberOutcome::Recorded) => {}
                Ok(MemberOutcome::Failed) => {}
                Ok(MemberOutcome::Skipped) => {
                    self.skipped += 1;
                }
                Err(e) => {
                    // Per-file recoverable: skip the member, keep the run
                    warn!("error processing {member_name}: {e}");
                    self.read_errors += 1;
                }
            }

            if let Some(bar) = progress {
                bar.inc(1);
            }
        }

        info!(
            "processed {} members: {} records, {} failures, {} skipped, {} read errors",
            members.len(),
            self.records.len(),
            self.failures.len(),
            self.skipped,
            self.read_errors
        );
        Ok(())
    }

    /// Process a single archive member
    fn process_member(
        &mut self,
        zip: &mut zip::ZipArchive<std::fs::File>,
        member_name: &str,
    ) -> Result<MemberOutcome> {
        // Paths without network/station segments carry no identifiers
        let Some(sensor_path) = SensorPath::parse(member_name) else {
            return Ok(MemberOutcome::Skipped);
        };

        let file = archive::read_sensor_file(zip, member_name)?;

        match extract_coordinates(&file.lines, &file.archive_path) {
            Ok(extraction) => {
                self.records
                    .push(build_record(&sensor_path, &extraction, &file.archive_path));
                Ok(MemberOutcome::Recorded)
            }
            Err(failure) => {
                self.failures.push(failure);
                Ok(MemberOutcome::Failed)
            }
        }
    }

    /// Records accumulated so far, in archive order
    pub fn records(&self) -> &[SensorRecord] {
        &self.records
    }

    /// Extraction failures accumulated so far, in archive order
    pub fn failures(&self) -> &[ExtractionFailure] {
        &self.failures
    }

    /// Members skipped for unusable paths
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Members abandoned on read errors
    pub fn read_errors(&self) -> usize {
        self.read_errors
    }

    /// Consume the processor, yielding the two collections
    pub fn into_results(self) -> (Vec<SensorRecord>, Vec<ExtractionFailure>) {
        (self.records, self.failures)
    }
}
