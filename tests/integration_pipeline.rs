//! End-to-end pipeline tests over a real zip archive.
//!
//! Builds small ISMN-style archives on disk, runs the full processing
//! pipeline (member listing, extraction cascade, quality pass), and
//! checks exports and failure reporting.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use ismn_processor::app::services::exporter::{ExportFormat, export_records};
use ismn_processor::app::services::failure_report::write_failure_report;
use ismn_processor::app::services::processor::ArchiveProcessor;
use ismn_processor::app::services::quality_filter::apply_quality_filters;
use ismn_processor::config::QualityConfig;
use ismn_processor::{CoordinateSource, Error};
use zip::write::SimpleFileOptions;

/// Write a zip archive with the given (member path, body) pairs
fn build_archive(dir: &Path, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("ismn_test.zip");
    let file = File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, body) in members {
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

const VALID_HEADER_BODY: &str = "\
# ISMN sensor file
# LATITUDE = 45.5
# LONGITUDE: -93.2
2015/01/01 00:00 0.312 G
2015/01/01 01:00 0.310 G
";

const NULL_ISLAND_BODY: &str = "\
# ISMN sensor file
latitude = 0.0
longitude = 0.0
2015/01/01 00:00 0.250 G
";

const UNPARSABLE_BODY: &str = "\
corrupt header with no usable values
second line of noise
";

#[test]
fn archive_with_mixed_members_yields_one_clean_record() {
    let dir = tempfile::tempdir().unwrap();
    let archive = build_archive(
        dir.path(),
        &[
            ("SCAN/Little_River/sm_0.05.stm", VALID_HEADER_BODY),
            ("SCAN/Defaulted/sm_0.05.stm", NULL_ISLAND_BODY),
            ("SCAN/Broken/sm_depth.stm", UNPARSABLE_BODY),
        ],
    );

    let mut processor = ArchiveProcessor::new();
    processor.process_archive(&archive, None).unwrap();

    // Null island extracts (each header axis is only range-gated), so two
    // records come out of extraction; the unparsable member fails.
    assert_eq!(processor.records().len(), 2);
    assert_eq!(processor.failures().len(), 1);
    assert_eq!(processor.failures()[0].file_path, "SCAN/Broken/sm_depth.stm");

    let (records, failures) = processor.into_results();
    let outcome = apply_quality_filters(records, &QualityConfig::default());

    // The quality pass removes the null-island record
    assert_eq!(outcome.records.len(), 1);
    let record = &outcome.records[0];
    assert_eq!(record.sensor_id, "sm_0.05");
    assert_eq!(record.station_id, "Little River");
    assert_eq!(record.network_id, "SCAN");
    assert_eq!(record.latitude, 45.5);
    assert_eq!(record.longitude, -93.2);
    assert_eq!(record.coordinate_source, CoordinateSource::Header);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].issue, "no_coordinates_found");
}

#[test]
fn repackaged_duplicates_collapse_to_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let archive = build_archive(
        dir.path(),
        &[
            ("SCAN/Little_River/sm_0.05.stm", VALID_HEADER_BODY),
            ("SCAN/Little_River/mirror/sm_0.05.stm", VALID_HEADER_BODY),
        ],
    );

    let mut processor = ArchiveProcessor::new();
    processor.process_archive(&archive, None).unwrap();
    assert_eq!(processor.records().len(), 2);

    let (records, _) = processor.into_results();
    let outcome = apply_quality_filters(records, &QualityConfig::default());

    // Same sensor/station/network/coordinates, different member path
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.stats.duplicates_dropped, 1);
    assert_eq!(
        outcome.records[0].file_path,
        "SCAN/Little_River/sm_0.05.stm"
    );
}

#[test]
fn ineligible_and_short_path_members_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let archive = build_archive(
        dir.path(),
        &[
            ("SCAN/Little_River/sm_0.05.stm", VALID_HEADER_BODY),
            ("SCAN/Little_River/readme.txt", "not a sensor file"),
            ("top_level_sm_file.stm", VALID_HEADER_BODY),
        ],
    );

    let mut processor = ArchiveProcessor::new();
    processor.process_archive(&archive, None).unwrap();

    // readme.txt is ineligible; the top-level member has too few path
    // segments to derive identifiers
    assert_eq!(processor.records().len(), 1);
    assert_eq!(processor.failures().len(), 0);
    assert_eq!(processor.skipped(), 1);
}

#[test]
fn missing_archive_aborts_before_processing() {
    let mut processor = ArchiveProcessor::new();
    let err = processor
        .process_archive(Path::new("/nonexistent/ismn.zip"), None)
        .unwrap_err();
    assert!(matches!(err, Error::ArchiveNotFound { .. }));
    assert!(processor.records().is_empty());
}

#[test]
fn failure_report_written_only_for_failures() {
    let dir = tempfile::tempdir().unwrap();
    let archive = build_archive(
        dir.path(),
        &[
            ("SCAN/Little_River/sm_0.05.stm", VALID_HEADER_BODY),
            ("SCAN/Broken/sm_depth.stm", UNPARSABLE_BODY),
        ],
    );

    let mut processor = ArchiveProcessor::new();
    processor.process_archive(&archive, None).unwrap();
    let (_, failures) = processor.into_results();

    let report_path = dir.path().join("failed_coordinates.txt");
    assert!(write_failure_report(&failures, &report_path).unwrap());

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("File: SCAN/Broken/sm_depth.stm"));
    assert!(report.contains("Issue: no_coordinates_found"));
    assert!(report.contains("  corrupt header with no usable values"));
}

#[test]
fn cleaned_records_export_to_csv_and_geojson() {
    let dir = tempfile::tempdir().unwrap();
    let archive = build_archive(
        dir.path(),
        &[("SCAN/Little_River/sm_0.05.stm", VALID_HEADER_BODY)],
    );

    let mut processor = ArchiveProcessor::new();
    processor.process_archive(&archive, None).unwrap();
    let (records, _) = processor.into_results();
    let outcome = apply_quality_filters(records, &QualityConfig::default());

    let stem = dir.path().join("sensors");
    let csv_path = export_records(&outcome.records, &stem, ExportFormat::Csv).unwrap();
    assert_eq!(csv_path, dir.path().join("sensors.csv"));
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Sensor_ID,"));
    assert!(csv.contains("header"));

    let geojson_path = export_records(&outcome.records, &stem, ExportFormat::GeoJson).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&geojson_path).unwrap()).unwrap();
    assert_eq!(parsed["features"].as_array().unwrap().len(), 1);
    let coords = &parsed["features"][0]["geometry"]["coordinates"];
    assert_eq!(coords[0].as_f64().unwrap(), -93.2);
    assert_eq!(coords[1].as_f64().unwrap(), 45.5);
}

#[test]
fn unknown_export_format_lists_supported_names() {
    let err = "kml".parse::<ExportFormat>().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("kml"));
    for name in ["geojson", "shp", "gpkg", "parquet", "csv"] {
        assert!(message.contains(name), "error should mention {name}");
    }
}
