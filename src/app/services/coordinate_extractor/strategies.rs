//! Coordinate candidate extraction strategies.
//!
//! Four independent, pure strategies, each attempting to recover a
//! coordinate pair from a different signal in a sensor file: explicit
//! header labels, ISMN metadata lines, leading numeric pairs in data rows,
//! and values embedded in the file name. The orchestrator tries them in
//! priority order; none of them share state.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::validator::is_plausible_pair;
use crate::app::models::CoordinatePair;
use crate::constants::{HEADER_SCAN_LINES, METADATA_SCAN_LINES, PATTERN_SCAN_LINES};

/// `latitude = 45.5` / `latitude: 45.5`, case-insensitive
static LAT_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)latitude\s*[=:]\s*([-+]?\d+\.?\d*)").expect("latitude label pattern")
});

/// `longitude = -93.2` / `longitude: -93.2`, case-insensitive
static LON_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)longitude\s*[=:]\s*([-+]?\d+\.?\d*)").expect("longitude label pattern")
});

/// Any signed decimal-number token
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d+\.?\d*").expect("number pattern"));

/// Decimals with at least four fractional digits, a strong signal of real
/// coordinate data as opposed to integer identifiers
static HIGH_PRECISION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d+\.\d{4,}").expect("high precision pattern"));

/// Token runs separated by commas, whitespace, or tabs
static DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s\t]+").expect("delimiter pattern"));

/// Two adjacent decimal numbers joined by an underscore in a file name
static FILENAME_COORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([-+]?\d+\.?\d*)_([-+]?\d+\.?\d*)").expect("filename pattern"));

/// Find coordinates in explicitly labeled header lines
///
/// Scans the first 50 lines for independent `latitude` and `longitude`
/// labels followed by `=` or `:` and a signed decimal. Each axis is gated
/// only by its own range; a later in-range match overwrites an earlier one.
/// Succeeds only when both axes were found, in any order, on any lines.
pub fn find_header_coordinates(lines: &[String]) -> Option<CoordinatePair> {
    let mut lat = None;
    let mut lon = None;

    for line in lines.iter().take(HEADER_SCAN_LINES) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(value) = labeled_value(&LAT_LABEL_RE, line, -90.0, 90.0) {
            lat = Some(value);
        }
        if let Some(value) = labeled_value(&LON_LABEL_RE, line, -180.0, 180.0) {
            lon = Some(value);
        }
    }

    match (lat, lon) {
        (Some(latitude), Some(longitude)) => Some(CoordinatePair::new(latitude, longitude)),
        _ => None,
    }
}

/// Parse a labeled value from a line, gated by an inclusive range
fn labeled_value(pattern: &Regex, line: &str, min: f64, max: f64) -> Option<f64> {
    let caps = pattern.captures(line)?;
    let value = caps[1].parse::<f64>().ok()?;
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        None
    }
}

/// Find coordinates in ISMN metadata lines
///
/// Scans the first 100 lines for three progressively weaker signals:
/// comment-marked station lines, location/coordinates/position keywords,
/// and high-precision decimals. Each matching line goes through adjacent
/// pair extraction; the first plausible pair wins in line order.
pub fn parse_ismn_metadata(lines: &[String]) -> Option<CoordinatePair> {
    for line in lines.iter().take(METADATA_SCAN_LINES) {
        let line = line.trim();
        let lowered = line.to_lowercase();

        if line.starts_with('#') && lowered.contains("station") {
            if let Some(pair) = extract_coordinate_pair(line) {
                trace!("metadata station line yielded {:?}", pair);
                return Some(pair);
            }
        }

        if ["location", "coordinates", "position"]
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            if let Some(pair) = extract_coordinate_pair(line) {
                return Some(pair);
            }
        }

        if HIGH_PRECISION_RE.is_match(line) {
            if let Some(pair) = extract_coordinate_pair(line) {
                return Some(pair);
            }
        }
    }

    None
}

/// Find a leading numeric pair in the first data lines
///
/// Checks lines 2-20 (the first line is presumed a column header), skipping
/// blanks and comment lines, splitting on comma/whitespace/tab runs. Only
/// the first two tokens are considered, in the order given: data rows are
/// trusted to list latitude first, so no swapped ordering is attempted.
pub fn find_pattern_coordinates(lines: &[String]) -> Option<CoordinatePair> {
    for line in lines.iter().take(PATTERN_SCAN_LINES).skip(1) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = DELIMITER_RE.split(line).collect();
        if parts.len() < 2 {
            continue;
        }

        let (Ok(lat), Ok(lon)) = (parts[0].parse::<f64>(), parts[1].parse::<f64>()) else {
            continue;
        };
        if is_plausible_pair(lat, lon) {
            return Some(CoordinatePair::new(lat, lon));
        }
    }

    None
}

/// Extract coordinates embedded in the file name
///
/// Matches two adjacent decimal numbers separated by an underscore in the
/// base name, e.g. `station_45.234_-93.456.csv`.
pub fn extract_from_filename(archive_path: &str) -> Option<CoordinatePair> {
    let normalized = archive_path.replace('\\', "/");
    let filename = normalized.rsplit('/').next().unwrap_or(&normalized);

    let caps = FILENAME_COORD_RE.captures(filename)?;
    let (Ok(lat), Ok(lon)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) else {
        return None;
    };

    if is_plausible_pair(lat, lon) {
        return Some(CoordinatePair::new(lat, lon));
    }
    None
}

/// Extract a plausible coordinate pair from a single line
///
/// Collects every decimal-number token and tests each adjacent pair
/// left-to-right, first in the order given and then swapped, against the
/// plausibility rules. The swap recovers the common `lon lat` ordering in
/// free-form metadata.
pub fn extract_coordinate_pair(line: &str) -> Option<CoordinatePair> {
    let numbers: Vec<f64> = NUMBER_RE
        .find_iter(line)
        .filter_map(|token| token.as_str().parse::<f64>().ok())
        .collect();

    if numbers.len() < 2 {
        return None;
    }

    for window in numbers.windows(2) {
        let (first, second) = (window[0], window[1]);

        if is_plausible_pair(first, second) {
            return Some(CoordinatePair::new(first, second));
        }
        if is_plausible_pair(second, first) {
            return Some(CoordinatePair::new(second, first));
        }
    }

    None
}
