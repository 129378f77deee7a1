//! Tests for composite-key record deduplication.

use super::record_at;
use crate::app::services::quality_filter::{FilterStats, deduplication::deduplicate_records};

#[test]
fn identical_records_collapse_to_one() {
    let mut stats = FilterStats::new();
    let unique = deduplicate_records(
        vec![record_at("a", 45.5, -93.2), record_at("a", 45.5, -93.2)],
        &mut stats,
    );
    assert_eq!(unique.len(), 1);
    assert_eq!(stats.duplicates_dropped, 1);
}

#[test]
fn file_path_is_not_part_of_identity() {
    let mut stats = FilterStats::new();
    let mut copy = record_at("a", 45.5, -93.2);
    copy.file_path = "TESTNET/Test_Station/repackaged/a.stm".to_string();

    let unique = deduplicate_records(vec![record_at("a", 45.5, -93.2), copy], &mut stats);
    assert_eq!(unique.len(), 1);
    assert_eq!(stats.duplicates_dropped, 1);
}

#[test]
fn first_occurrence_wins() {
    let mut stats = FilterStats::new();
    let first = record_at("a", 45.5, -93.2);
    let mut second = record_at("a", 45.5, -93.2);
    second.file_path = "later/path/a.stm".to_string();

    let unique = deduplicate_records(vec![first.clone(), second], &mut stats);
    assert_eq!(unique[0].file_path, first.file_path);
}

#[test]
fn differing_coordinates_are_distinct() {
    let mut stats = FilterStats::new();
    let unique = deduplicate_records(
        vec![record_at("a", 45.5, -93.2), record_at("a", 45.5, -93.3)],
        &mut stats,
    );
    assert_eq!(unique.len(), 2);
    assert_eq!(stats.duplicates_dropped, 0);
}

#[test]
fn differing_sensor_ids_are_distinct() {
    let mut stats = FilterStats::new();
    let unique = deduplicate_records(
        vec![record_at("a", 45.5, -93.2), record_at("b", 45.5, -93.2)],
        &mut stats,
    );
    assert_eq!(unique.len(), 2);
}

#[test]
fn preserves_input_order() {
    let mut stats = FilterStats::new();
    let unique = deduplicate_records(
        vec![
            record_at("c", 45.5, -93.2),
            record_at("a", 46.5, -93.2),
            record_at("b", 47.5, -93.2),
        ],
        &mut stats,
    );
    let ids: Vec<&str> = unique.iter().map(|r| r.sensor_id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}
