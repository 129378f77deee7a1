//! Extraction strategy orchestration.
//!
//! Runs the candidate extractors in fixed priority order and stops at the
//! first success, tagging the accepted pair with the strategy that produced
//! it. When every strategy fails, the caller receives a structured failure
//! entry instead of an error: single-file failures never abort a run.

use tracing::debug;

use super::strategies::{
    extract_from_filename, find_header_coordinates, find_pattern_coordinates, parse_ismn_metadata,
};
use crate::app::models::{
    CoordinatePair, CoordinateSource, ExtractionFailure, ExtractionResult,
};

/// One entry in the cascade: the strategy tag and its extraction function
///
/// The file path is threaded through the uniform signature because the
/// lowest-priority strategy reads the file name rather than the body.
type Strategy = (
    CoordinateSource,
    fn(&[String], &str) -> Option<CoordinatePair>,
);

/// The cascade, highest-trust first
const STRATEGIES: [Strategy; 4] = [
    (CoordinateSource::Header, |lines, _| {
        find_header_coordinates(lines)
    }),
    (CoordinateSource::IsmnMetadata, |lines, _| {
        parse_ismn_metadata(lines)
    }),
    (CoordinateSource::PatternMatch, |lines, _| {
        find_pattern_coordinates(lines)
    }),
    (CoordinateSource::Filename, |_, path| {
        extract_from_filename(path)
    }),
];

/// Try every strategy in priority order, returning the first success
///
/// Returns `Ok(result)` with the source tag of the winning strategy, or
/// `Err(failure)` carrying the file path and leading lines when the whole
/// cascade comes up empty.
pub fn extract_coordinates(
    lines: &[String],
    archive_path: &str,
) -> Result<ExtractionResult, ExtractionFailure> {
    for (source, strategy) in STRATEGIES {
        if let Some(coordinates) = strategy(lines, archive_path) {
            debug!(
                "extracted ({}, {}) from {} via {}",
                coordinates.latitude, coordinates.longitude, archive_path, source
            );
            return Ok(ExtractionResult {
                coordinates,
                source,
            });
        }
    }

    debug!("no coordinates found in {}", archive_path);
    Err(ExtractionFailure::no_coordinates(archive_path, lines))
}
