//! Data models for ISMN archive processing
//!
//! Core data structures for sensor archive members, extracted coordinates,
//! and the sensor inventory records persisted to output.

use serde::{Deserialize, Serialize};

use crate::constants::FAILURE_CONTEXT_LINES;

// =============================================================================
// Coordinates
// =============================================================================

/// A geographic coordinate pair in WGS84 decimal degrees
///
/// Candidate pairs in range `[-90, 90] x [-180, 180]` are produced by the
/// extraction strategies; the stricter plausibility rules live in
/// [`crate::app::services::coordinate_extractor::is_plausible_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,

    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
}

impl CoordinatePair {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The extraction strategy that produced an accepted coordinate pair
///
/// A source is only ever attached at extraction time by the strategy that
/// actually succeeded; it is never inferred after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSource {
    /// Explicit `latitude = ...` / `longitude = ...` header labels
    Header,
    /// ISMN metadata lines (station comments, location keywords,
    /// high-precision decimals)
    IsmnMetadata,
    /// Leading numeric pair in the first data lines
    PatternMatch,
    /// Underscore-separated pair embedded in the file name
    Filename,
}

impl CoordinateSource {
    /// Stable tag used in output tables and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateSource::Header => "header",
            CoordinateSource::IsmnMetadata => "ismn_metadata",
            CoordinateSource::PatternMatch => "pattern_match",
            CoordinateSource::Filename => "filename",
        }
    }

    /// All strategies in cascade priority order
    pub fn all() -> [CoordinateSource; 4] {
        [
            CoordinateSource::Header,
            CoordinateSource::IsmnMetadata,
            CoordinateSource::PatternMatch,
            CoordinateSource::Filename,
        ]
    }
}

impl std::fmt::Display for CoordinateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful coordinate extraction, tagged with its originating strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionResult {
    /// The accepted coordinate pair
    pub coordinates: CoordinatePair,

    /// Strategy that produced the pair
    pub source: CoordinateSource,
}

// =============================================================================
// Archive members
// =============================================================================

/// One decoded sensor file from the archive
///
/// The body is read once, lossily decoded, and split into lines; the handle
/// is discarded after record extraction.
#[derive(Debug, Clone)]
pub struct SensorFile {
    /// Archive-relative member path
    pub archive_path: String,

    /// Decoded text body, one entry per line
    pub lines: Vec<String>,
}

/// Outcome of processing a single archive member
///
/// Per-file failures are data, not errors: each member contributes at most
/// one entry to either the record or the failure collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOutcome {
    /// A sensor record was extracted and appended
    Recorded,
    /// All extraction strategies failed; a failure entry was appended
    Failed,
    /// The member path had too few segments to derive identifiers
    Skipped,
}

// =============================================================================
// Sensor records
// =============================================================================

/// One sensor inventory row, the unit persisted to output
///
/// Immutable once appended to the run's collection; the quality filter may
/// still remove it for cross-record reasons before export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    /// File name without extension, unique within a station directory
    pub sensor_id: String,

    /// Cleaned station display name (second path segment)
    pub station_id: String,

    /// Cleaned network display name (first path segment)
    pub network_id: String,

    /// Human-readable network name
    pub network_name: String,

    /// Latitude in WGS84 decimal degrees
    pub latitude: f64,

    /// Longitude in WGS84 decimal degrees
    pub longitude: f64,

    /// Original archive-relative path, kept for provenance
    pub file_path: String,

    /// Strategy that recovered the coordinates
    pub coordinate_source: CoordinateSource,
}

impl SensorRecord {
    /// Composite identity used for deduplication
    ///
    /// Excludes `file_path` so re-packaged copies of the same sensor
    /// collapse to one row. Float coordinates are keyed by their bit
    /// patterns, which is exact for values parsed from the same text.
    pub fn dedup_key(&self) -> (String, String, String, u64, u64) {
        (
            self.sensor_id.clone(),
            self.station_id.clone(),
            self.network_id.clone(),
            self.latitude.to_bits(),
            self.longitude.to_bits(),
        )
    }
}

// =============================================================================
// Extraction failures
// =============================================================================

/// Diagnostic entry recorded when every strategy fails for a file
///
/// Accumulated in parallel with the record collection and written out as a
/// plain-text report; never re-read by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionFailure {
    /// Archive-relative path of the failing member
    pub file_path: String,

    /// First raw lines of the member body, for manual inspection
    pub first_lines: Vec<String>,

    /// Fixed issue tag
    pub issue: String,
}

impl ExtractionFailure {
    /// Capture a failure with the leading lines of the member body
    pub fn no_coordinates(file_path: impl Into<String>, lines: &[String]) -> Self {
        Self {
            file_path: file_path.into(),
            first_lines: lines
                .iter()
                .take(FAILURE_CONTEXT_LINES)
                .cloned()
                .collect(),
            issue: crate::constants::NO_COORDINATES_ISSUE.to_string(),
        }
    }
}
