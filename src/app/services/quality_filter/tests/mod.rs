//! Tests for the quality filtering and deduplication pass.

pub mod deduplication_tests;

use crate::app::models::{CoordinateSource, SensorRecord};

/// Create a test record at the given coordinates
pub fn record_at(sensor_id: &str, latitude: f64, longitude: f64) -> SensorRecord {
    SensorRecord {
        sensor_id: sensor_id.to_string(),
        station_id: "Test Station".to_string(),
        network_id: "TESTNET".to_string(),
        network_name: "TESTNET".to_string(),
        latitude,
        longitude,
        file_path: format!("TESTNET/Test_Station/{sensor_id}.stm"),
        coordinate_source: CoordinateSource::Header,
    }
}

/// Create `count` records sharing one location, with distinct sensor ids
pub fn colocated_records(count: usize, latitude: f64, longitude: f64) -> Vec<SensorRecord> {
    (0..count)
        .map(|i| record_at(&format!("sensor_{i}"), latitude, longitude))
        .collect()
}
