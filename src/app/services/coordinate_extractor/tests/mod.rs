//! Tests for the coordinate extraction cascade.

pub mod orchestrator_tests;

/// Build an owned line list from string literals
pub fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|line| line.to_string()).collect()
}

/// A realistic ISMN header block with explicit coordinate labels
pub fn labeled_header() -> Vec<String> {
    lines(&[
        "# ISMN station data",
        "# LATITUDE = 45.5",
        "# LONGITUDE: -93.2",
        "# depth_from = 0.05",
        "2015/01/01 00:00 0.312 G",
    ])
}
