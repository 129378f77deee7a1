//! ISMN Processor Library
//!
//! A Rust library for turning ISMN soil-moisture sensor archives into
//! cleaned station inventories and GIS-ready point exports.
//!
//! This library provides tools for:
//! - Recovering (latitude, longitude) pairs from inconsistent, partially
//!   corrupt sensor-file headers via a prioritized strategy cascade
//! - Validating coordinate candidates against plausibility rules
//! - Deriving network/station/sensor identifiers from archive paths
//! - Detecting and removing systematically wrong parses (null island,
//!   mirrored coordinates, duplicates, vertical-line artifacts)
//! - Exporting the cleaned inventory as GeoJSON, Shapefile, GeoPackage,
//!   Parquet, or CSV
//! - Resampling sensor/time data cubes to daily statistic tables

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod archive;
        pub mod coordinate_extractor;
        pub mod exporter;
        pub mod failure_report;
        pub mod processor;
        pub mod quality_filter;
        pub mod record_builder;
        pub mod time_series;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CoordinatePair, CoordinateSource, ExtractionResult, SensorRecord};
pub use app::services::coordinate_extractor::{extract_coordinates, is_plausible_pair};
pub use config::ProcessingConfig;

/// Result type alias for the ISMN processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for ISMN processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input archive does not exist
    #[error("Archive not found: {path}")]
    ArchiveNotFound { path: std::path::PathBuf },

    /// Zip archive could not be read
    #[error("Archive error: {message}")]
    Archive {
        message: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// DataFrame construction or writing failed
    #[error("DataFrame error: {0}")]
    DataFrame(#[from] polars::error::PolarsError),

    /// Geospatial export failed
    #[error("Geospatial export error: {message}")]
    Geospatial {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Export format name outside the allow-list
    #[error("Unsupported format: {requested}. Supported formats are: {supported}")]
    UnsupportedFormat { requested: String, supported: String },

    /// Statistic name outside the allow-list
    #[error("Statistic '{requested}' is not supported. Use one of: {supported}")]
    UnsupportedStatistic { requested: String, supported: String },

    /// Attempt to build output from zero records
    #[error("No sensor records to export: the archive yielded an empty record set")]
    EmptyRecordSet,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an archive-not-found error
    pub fn archive_not_found(path: impl Into<std::path::PathBuf>) -> Self {
        Self::ArchiveNotFound { path: path.into() }
    }

    /// Create an archive error with context
    pub fn archive(message: impl Into<String>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            message: message.into(),
            source,
        }
    }

    /// Create a geospatial export error
    pub fn geospatial(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Geospatial {
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported-format error listing the allowed set
    pub fn unsupported_format(requested: impl Into<String>, supported: &[&str]) -> Self {
        Self::UnsupportedFormat {
            requested: requested.into(),
            supported: supported.join(", "),
        }
    }

    /// Create an unsupported-statistic error listing the allowed set
    pub fn unsupported_statistic(requested: impl Into<String>, supported: &[&str]) -> Self {
        Self::UnsupportedStatistic {
            requested: requested.into(),
            supported: supported.join(", "),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
