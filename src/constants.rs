//! Constants for ISMN archive processing.
//!
//! Scan-window sizes, plausibility thresholds, and eligibility markers used
//! across the coordinate extraction cascade and the quality filter.

/// Number of leading lines scanned by the header-label strategy
pub const HEADER_SCAN_LINES: usize = 50;

/// Number of leading lines scanned by the domain-metadata strategy
pub const METADATA_SCAN_LINES: usize = 100;

/// Number of leading lines scanned by the generic-pattern strategy
/// (the first line is always skipped as a presumed column header)
pub const PATTERN_SCAN_LINES: usize = 20;

/// Number of raw lines captured in an extraction failure report
pub const FAILURE_CONTEXT_LINES: usize = 10;

/// Coordinates closer to zero than this are treated as placeholders
pub const MIN_COORDINATE_MAGNITUDE: f64 = 0.001;

/// Display names longer than this are truncated to their first token
pub const MAX_DISPLAY_NAME_LEN: usize = 50;

/// Issue tag recorded when every extraction strategy fails for a file
pub const NO_COORDINATES_ISSUE: &str = "no_coordinates_found";

/// File extensions that mark an archive member as a sensor file
pub const SENSOR_FILE_EXTENSIONS: &[&str] = &[".stm", ".csv"];

/// Lowercased infix that marks an archive member as a soil-moisture file
pub const SOIL_MOISTURE_MARKER: &str = "sm_";

/// Quality diagnostic thresholds
pub mod diagnostics {
    /// Records sharing one rounded location beyond this count are suspicious
    pub const REPEAT_FLAG_THRESHOLD: usize = 10;

    /// Records sharing one rounded longitude beyond this count suggest a
    /// vertical-line parsing artifact
    pub const VERTICAL_LINE_THRESHOLD: usize = 20;

    /// Decimal places used when grouping coordinates for diagnostics
    pub const ROUNDING_DECIMALS: i32 = 3;
}

/// Soil-moisture sentinel codes and physical bounds
pub mod sentinels {
    /// Long-form missing-value code used by several networks
    pub const MISSING_LONG: f64 = -9999.0;

    /// Short-form missing-value code
    pub const MISSING_SHORT: f64 = -999.0;

    /// Lower bound of valid volumetric soil moisture
    pub const VALID_MIN: f64 = 0.0;

    /// Upper bound of valid volumetric soil moisture
    pub const VALID_MAX: f64 = 1.0;
}
