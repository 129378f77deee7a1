//! Command-line argument definitions for the ISMN processor
//!
//! Defines the complete CLI interface using the clap derive API. Format
//! and statistic names are validated at command execution so rejection
//! messages can list the supported sets.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the ISMN sensor archive processor
///
/// Converts ISMN soil-moisture sensor archives into cleaned station
/// inventories with point geometry, plus daily time-series tables from
/// pre-structured data cubes.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ismn-processor",
    version,
    about = "Convert ISMN soil-moisture sensor archives into cleaned, GIS-ready station inventories",
    long_about = "Processes ISMN-style zip distributions of per-sensor station files into tabular \
                  and geospatial outputs. Coordinates are recovered from inconsistent, partially \
                  corrupt text headers by a best-effort strategy cascade; systematically wrong \
                  parses are detected and removed before export."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process a sensor archive into a cleaned inventory export
    Process(ProcessArgs),
    /// Resample a sensor/time data cube to a daily statistic table
    Resample(ResampleArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the ISMN zip archive
    ///
    /// Member paths are expected to follow <network>/<station>/<filename>;
    /// eligible members end in .stm/.csv or carry an sm_ marker.
    #[arg(
        short = 'a',
        long = "archive",
        value_name = "PATH",
        help = "Path to the ISMN zip archive"
    )]
    pub archive: PathBuf,

    /// Output path stem for the export file
    ///
    /// The format's extension is appended, e.g. `out/sensors` becomes
    /// `out/sensors.geojson`. Defaults to `output/sensors`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "STEM",
        default_value = "output/sensors",
        help = "Output path stem (extension is appended per format)"
    )]
    pub output_stem: PathBuf,

    /// Export format: geojson, shp, gpkg, parquet, or csv
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "geojson",
        help = "Export format (geojson, shp, gpkg, parquet, csv)"
    )]
    pub format: String,

    /// Skip writing the extraction failure report
    #[arg(long = "no-failure-report", help = "Skip the failure diagnostics file")]
    pub no_failure_report: bool,

    /// Logging verbosity (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Logging verbosity"
    )]
    pub log_level: String,

    /// Suppress the progress bar and summary block
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,
}

impl ProcessArgs {
    /// Validate argument consistency before running
    pub fn validate(&self) -> Result<()> {
        if self.output_stem.as_os_str().is_empty() {
            return Err(Error::configuration("output stem must not be empty"));
        }
        validate_log_level(&self.log_level)
    }
}

/// Arguments for the resample command
#[derive(Debug, Clone, Parser)]
pub struct ResampleArgs {
    /// Path to the sensor/time data cube (.csv or .parquet)
    ///
    /// Must carry sensor_id, date_time, and soil_moisture columns.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Path to the sensor/time data cube (.csv or .parquet)"
    )]
    pub input: PathBuf,

    /// Daily statistic: mean, median, min, max, sum, or std
    #[arg(
        short = 's',
        long = "statistic",
        value_name = "STAT",
        default_value = "mean",
        help = "Daily aggregation statistic"
    )]
    pub statistic: String,

    /// Output CSV path for the daily table
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "output/daily_soil_moisture.csv",
        help = "Output CSV path"
    )]
    pub output: PathBuf,

    /// Logging verbosity (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Logging verbosity"
    )]
    pub log_level: String,
}

impl ResampleArgs {
    pub fn validate(&self) -> Result<()> {
        validate_log_level(&self.log_level)
    }
}

fn validate_log_level(level: &str) -> Result<()> {
    const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
    if LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Unknown log level '{level}'. Supported levels: {}",
            LEVELS.join(", ")
        )))
    }
}
