//! Degenerate-coordinate filtering.
//!
//! Removes the rows that slip past extraction with systematically wrong
//! coordinates: zeros on either axis (defaulted values the header strategy
//! accepts because it gates each axis independently) and identical
//! latitude/longitude pairs.

use tracing::{debug, info};

use super::stats::FilterStats;
use crate::app::models::SensorRecord;

/// Drop records with degenerate coordinates
///
/// Removes rows where either axis is exactly zero, then rows where the two
/// axes are identical. Runs before deduplication so duplicate groups are
/// counted over already-plausible rows.
pub fn drop_degenerate_coordinates(
    records: Vec<SensorRecord>,
    stats: &mut FilterStats,
) -> Vec<SensorRecord> {
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        if record.latitude == 0.0 || record.longitude == 0.0 {
            stats.zero_coordinate_dropped += 1;
            debug!(
                "dropping {}: zero coordinate ({}, {})",
                record.file_path, record.latitude, record.longitude
            );
            continue;
        }

        if record.latitude == record.longitude {
            stats.mirrored_coordinate_dropped += 1;
            debug!(
                "dropping {}: identical lat/lon {}",
                record.file_path, record.latitude
            );
            continue;
        }

        kept.push(record);
    }

    info!(
        "degenerate-coordinate filter: {} zero, {} mirrored rows dropped",
        stats.zero_coordinate_dropped, stats.mirrored_coordinate_dropped
    );
    kept
}
