//! Tests for the extraction cascade priority and failure accounting.

use super::{labeled_header, lines};
use crate::app::models::CoordinateSource;
use crate::app::services::coordinate_extractor::extract_coordinates;

#[test]
fn header_strategy_wins_over_filename() {
    // The file name also carries coordinates; the higher-priority header
    // strategy must be the one reported.
    let result =
        extract_coordinates(&labeled_header(), "net/sta/station_45.234_-93.456.csv").unwrap();
    assert_eq!(result.source, CoordinateSource::Header);
    assert_eq!(result.coordinates.latitude, 45.5);
    assert_eq!(result.coordinates.longitude, -93.2);
}

#[test]
fn metadata_strategy_used_when_header_fails() {
    let body = lines(&[
        "# Station: Vandalia 38.9608 -89.1108",
        "2015/01/01 00:00 0.25 G",
    ]);
    let result = extract_coordinates(&body, "net/sta/sm_data.stm").unwrap();
    assert_eq!(result.source, CoordinateSource::IsmnMetadata);
    assert_eq!(result.coordinates.latitude, 38.9608);
}

#[test]
fn pattern_strategy_used_for_bare_data_files() {
    let body = lines(&["lat lon value", "45.5 -93.2 0.31"]);
    let result = extract_coordinates(&body, "net/sta/sm_data.stm").unwrap();
    assert_eq!(result.source, CoordinateSource::PatternMatch);
}

#[test]
fn filename_strategy_is_last_resort() {
    let body = lines(&["soil moisture record", "no usable values"]);
    let result = extract_coordinates(&body, "net/sta/sm_45.234_-93.456.stm").unwrap();
    assert_eq!(result.source, CoordinateSource::Filename);
    assert_eq!(result.coordinates.latitude, 45.234);
}

#[test]
fn total_failure_yields_structured_entry() {
    let body: Vec<String> = (0..25).map(|i| format!("opaque line {i}")).collect();
    let failure = extract_coordinates(&body, "net/sta/sm_broken.stm").unwrap_err();
    assert_eq!(failure.file_path, "net/sta/sm_broken.stm");
    assert_eq!(failure.issue, "no_coordinates_found");
    assert_eq!(failure.first_lines.len(), 10);
    assert_eq!(failure.first_lines[0], "opaque line 0");
}

#[test]
fn empty_body_still_tries_filename() {
    let result = extract_coordinates(&[], "net/sta/sm_45.234_-93.456.stm").unwrap();
    assert_eq!(result.source, CoordinateSource::Filename);
}
