//! Sensor record deduplication.
//!
//! Archives frequently carry the same sensor twice, re-packaged under a
//! different member path. Identity is the composite of the derived
//! identifiers and the exact coordinates; `file_path` is deliberately
//! excluded so re-packaged copies collapse. The first occurrence in
//! archive order wins.

use std::collections::HashSet;

use tracing::{debug, info};

use super::stats::FilterStats;
use crate::app::models::SensorRecord;

/// Remove duplicate records, keeping the first occurrence of each key
pub fn deduplicate_records(
    records: Vec<SensorRecord>,
    stats: &mut FilterStats,
) -> Vec<SensorRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        if seen.insert(record.dedup_key()) {
            unique.push(record);
        } else {
            stats.duplicates_dropped += 1;
            debug!("dropping duplicate of {} at {}", record.sensor_id, record.file_path);
        }
    }

    info!(
        "deduplication: {} duplicate rows removed, {} remaining",
        stats.duplicates_dropped,
        unique.len()
    );
    unique
}
