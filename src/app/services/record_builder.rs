//! Sensor record construction from archive member paths.
//!
//! ISMN archives lay members out as `<network>/<station>/<filename>`; the
//! identifiers in the output table are derived positionally from that path
//! and cleaned for display.

use crate::app::models::{ExtractionResult, SensorRecord};
use crate::constants::MAX_DISPLAY_NAME_LEN;

/// Identifier segments derived from one archive member path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorPath {
    /// Raw network directory name (first segment)
    pub network: String,

    /// Raw station directory name (second segment)
    pub station: String,

    /// File name (last segment)
    pub filename: String,
}

impl SensorPath {
    /// Split an archive member path into identifier segments
    ///
    /// Backslashes are normalized and empty segments dropped. Returns
    /// `None` for paths with fewer than two segments: no identifiers can
    /// be derived, so extraction is never attempted for them.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.replace('\\', "/");
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

        if segments.len() < 2 {
            return None;
        }

        Some(Self {
            network: segments[0].to_string(),
            station: segments[1].to_string(),
            filename: segments[segments.len() - 1].to_string(),
        })
    }

    /// File name without its extension, used as the sensor id
    pub fn sensor_id(&self) -> String {
        match self.filename.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
            _ => self.filename.clone(),
        }
    }
}

/// Clean a raw directory name for display
///
/// Underscores become spaces; names longer than 50 characters collapse to
/// their first whitespace-delimited token (long names are usually a
/// concatenation artifact).
pub fn clean_name(name: &str) -> String {
    let cleaned = name.replace('_', " ").trim().to_string();
    if cleaned.len() > MAX_DISPLAY_NAME_LEN {
        cleaned
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    } else {
        cleaned
    }
}

/// Build the inventory record for one successfully extracted member
pub fn build_record(path: &SensorPath, extraction: &ExtractionResult, raw_path: &str) -> SensorRecord {
    let network_clean = clean_name(&path.network);
    SensorRecord {
        sensor_id: path.sensor_id(),
        station_id: clean_name(&path.station),
        network_id: network_clean.clone(),
        network_name: network_clean,
        latitude: extraction.coordinates.latitude,
        longitude: extraction.coordinates.longitude,
        file_path: raw_path.to_string(),
        coordinate_source: extraction.source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{CoordinatePair, CoordinateSource, ExtractionResult};

    #[test]
    fn parses_three_segment_paths() {
        let path = SensorPath::parse("SCAN/Little_River/sm_0.05.stm").unwrap();
        assert_eq!(path.network, "SCAN");
        assert_eq!(path.station, "Little_River");
        assert_eq!(path.filename, "sm_0.05.stm");
    }

    #[test]
    fn normalizes_backslashes_and_empty_segments() {
        let path = SensorPath::parse("SCAN\\Little_River\\\\sm_data.stm").unwrap();
        assert_eq!(path.network, "SCAN");
        assert_eq!(path.station, "Little_River");
    }

    #[test]
    fn rejects_short_paths() {
        assert!(SensorPath::parse("lonely_file.stm").is_none());
        assert!(SensorPath::parse("").is_none());
        assert!(SensorPath::parse("///").is_none());
    }

    #[test]
    fn two_segment_path_uses_station_as_filename() {
        let path = SensorPath::parse("SCAN/sm_data.stm").unwrap();
        assert_eq!(path.network, "SCAN");
        assert_eq!(path.station, "sm_data.stm");
        assert_eq!(path.filename, "sm_data.stm");
    }

    #[test]
    fn sensor_id_strips_extension() {
        let path = SensorPath::parse("SCAN/Little_River/sm_0.05.stm").unwrap();
        assert_eq!(path.sensor_id(), "sm_0.05");
    }

    #[test]
    fn clean_name_replaces_underscores() {
        assert_eq!(clean_name("Little_River"), "Little River");
        assert_eq!(clean_name("  SCAN "), "SCAN");
    }

    #[test]
    fn clean_name_truncates_long_names_to_first_token() {
        let long = "Extremely_Long_Station_Name_That_Keeps_Going_And_Going_Forever";
        assert_eq!(clean_name(long), "Extremely");
    }

    #[test]
    fn builds_complete_record() {
        let path = SensorPath::parse("SCAN/Little_River/sm_0.05.stm").unwrap();
        let extraction = ExtractionResult {
            coordinates: CoordinatePair::new(31.5072, -83.6729),
            source: CoordinateSource::Header,
        };
        let record = build_record(&path, &extraction, "SCAN/Little_River/sm_0.05.stm");

        assert_eq!(record.sensor_id, "sm_0.05");
        assert_eq!(record.station_id, "Little River");
        assert_eq!(record.network_id, "SCAN");
        assert_eq!(record.network_name, "SCAN");
        assert_eq!(record.latitude, 31.5072);
        assert_eq!(record.longitude, -83.6729);
        assert_eq!(record.file_path, "SCAN/Little_River/sm_0.05.stm");
        assert_eq!(record.coordinate_source, CoordinateSource::Header);
    }
}
