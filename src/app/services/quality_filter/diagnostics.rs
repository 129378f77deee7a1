//! Coordinate artifact diagnostics.
//!
//! Advisory analysis over the filtered record set. Systematic mis-parses
//! leave two signatures: many sensors stacked on one rounded location, and
//! the "vertical line" of many distinct stations sharing one longitude.
//! Both are reported, never auto-corrected: a dense network can legitimately
//! trip the thresholds.

use std::collections::HashMap;

use tracing::warn;

use crate::app::models::SensorRecord;
use crate::config::QualityConfig;
use crate::constants::diagnostics::ROUNDING_DECIMALS;

/// Advisory findings from the diagnostic pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateDiagnostics {
    /// Rounded (lat, lon) locations shared by more than 10 records,
    /// with their record counts, largest group first
    pub suspicious_repeats: Vec<((f64, f64), usize)>,

    /// Rounded longitudes shared by more than 20 records, with their
    /// record counts, largest group first
    pub vertical_lines: Vec<(f64, usize)>,
}

impl CoordinateDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.suspicious_repeats.is_empty() && self.vertical_lines.is_empty()
    }
}

/// Fixed-point key for grouping a coordinate rounded to 3 decimals
fn rounded_key(value: f64) -> i64 {
    (value * 10f64.powi(ROUNDING_DECIMALS)).round() as i64
}

fn key_to_value(key: i64) -> f64 {
    key as f64 / 10f64.powi(ROUNDING_DECIMALS)
}

/// Analyze the record set for systematic coordinate artifacts
///
/// Groups records by rounded location and by rounded longitude and flags
/// groups above the configured repeat (default >10) and vertical-line
/// (default >20) thresholds. Non-mutating: findings go to the run report
/// and the log only.
pub fn analyze_coordinate_patterns(
    records: &[SensorRecord],
    quality: &QualityConfig,
) -> CoordinateDiagnostics {
    let mut location_counts: HashMap<(i64, i64), usize> = HashMap::new();
    let mut longitude_counts: HashMap<i64, usize> = HashMap::new();

    for record in records {
        let lat_key = rounded_key(record.latitude);
        let lon_key = rounded_key(record.longitude);
        *location_counts.entry((lat_key, lon_key)).or_insert(0) += 1;
        *longitude_counts.entry(lon_key).or_insert(0) += 1;
    }

    let mut suspicious_repeats: Vec<((f64, f64), usize)> = location_counts
        .into_iter()
        .filter(|(_, count)| *count > quality.repeat_flag_threshold)
        .map(|((lat, lon), count)| ((key_to_value(lat), key_to_value(lon)), count))
        .collect();
    suspicious_repeats.sort_by(|a, b| b.1.cmp(&a.1));

    let mut vertical_lines: Vec<(f64, usize)> = longitude_counts
        .into_iter()
        .filter(|(_, count)| *count > quality.vertical_line_threshold)
        .map(|(lon, count)| (key_to_value(lon), count))
        .collect();
    vertical_lines.sort_by(|a, b| b.1.cmp(&a.1));

    for ((lat, lon), count) in &suspicious_repeats {
        warn!(
            "suspicious repeat: {} records at ({:.3}, {:.3})",
            count, lat, lon
        );
    }
    for (lon, count) in &vertical_lines {
        warn!(
            "potential vertical-line artifact: {} records at longitude {:.3}",
            count, lon
        );
    }

    CoordinateDiagnostics {
        suspicious_repeats,
        vertical_lines,
    }
}

/// Geographic extent of the record set, for the run summary
///
/// Returns `(lat_min, lat_max, lon_min, lon_max)`, or `None` on an empty set.
pub fn geographic_extent(records: &[SensorRecord]) -> Option<(f64, f64, f64, f64)> {
    let first = records.first()?;
    let mut extent = (
        first.latitude,
        first.latitude,
        first.longitude,
        first.longitude,
    );

    for record in records.iter().skip(1) {
        extent.0 = extent.0.min(record.latitude);
        extent.1 = extent.1.max(record.latitude);
        extent.2 = extent.2.min(record.longitude);
        extent.3 = extent.3.max(record.longitude);
    }
    Some(extent)
}

/// Per-strategy record counts, in cascade priority order
pub fn source_counts(records: &[SensorRecord]) -> Vec<(&'static str, usize)> {
    crate::app::models::CoordinateSource::all()
        .into_iter()
        .map(|source| {
            let count = records
                .iter()
                .filter(|r| r.coordinate_source == source)
                .count();
            (source.as_str(), count)
        })
        .collect()
}
