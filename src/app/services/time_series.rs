//! Daily time-series companion for soil-moisture data cubes.
//!
//! Works on an already-structured cube (`sensor_id`, `date_time`,
//! `soil_moisture` columns) rather than raw archive members: readings are
//! cleaned against the physical range and sentinel codes, resampled to
//! daily granularity with a chosen statistic, and pivoted to one row per
//! sensor with ISO date columns.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use polars::prelude::*;
use polars_ops::pivot::pivot_stable;
use tracing::{debug, info};

use crate::constants::sentinels;
use crate::{Error, Result};

/// Cube column holding the sensor identifier
pub const SENSOR_ID_COL: &str = "sensor_id";
/// Cube column holding the observation timestamp
pub const DATE_TIME_COL: &str = "date_time";
/// Cube column holding the volumetric soil-moisture reading
pub const SOIL_MOISTURE_COL: &str = "soil_moisture";

/// Statistic names accepted on the command line, in display order
pub const SUPPORTED_STATISTICS: &[&str] = &["mean", "median", "min", "max", "sum", "std"];

/// Daily aggregation statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
    Min,
    Max,
    Sum,
    Std,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Sum => "sum",
            Statistic::Std => "std",
        }
    }

    /// Aggregation expression over the cleaned readings
    fn aggregation(&self) -> Expr {
        let readings = col(SOIL_MOISTURE_COL);
        match self {
            Statistic::Mean => readings.mean(),
            Statistic::Median => readings.median(),
            Statistic::Min => readings.min(),
            Statistic::Max => readings.max(),
            Statistic::Sum => readings.sum(),
            // Sample standard deviation, matching the usual analysis default
            Statistic::Std => readings.std(1),
        }
    }
}

impl FromStr for Statistic {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "mean" => Ok(Statistic::Mean),
            "median" => Ok(Statistic::Median),
            "min" => Ok(Statistic::Min),
            "max" => Ok(Statistic::Max),
            "sum" => Ok(Statistic::Sum),
            "std" => Ok(Statistic::Std),
            other => Err(Error::unsupported_statistic(other, SUPPORTED_STATISTICS)),
        }
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read a sensor/time cube from CSV or Parquet, by file extension
pub fn read_cube(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let df = match extension.as_str() {
        "parquet" => {
            let file = File::open(path)
                .map_err(|e| Error::io(format!("opening {}", path.display()), e))?;
            ParquetReader::new(file).finish()?
        }
        "csv" => CsvReadOptions::default()
            .with_has_header(true)
            .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?,
        other => {
            return Err(Error::configuration(format!(
                "Unsupported cube format '{other}': expected a .csv or .parquet file"
            )));
        }
    };

    for required in [SENSOR_ID_COL, DATE_TIME_COL, SOIL_MOISTURE_COL] {
        if df.column(required).is_err() {
            return Err(Error::configuration(format!(
                "Cube at {} is missing required column '{required}'",
                path.display()
            )));
        }
    }

    debug!("read cube with {} rows from {}", df.height(), path.display());
    Ok(df)
}

/// Null out readings that cannot be real soil moisture
///
/// Values outside the physical [0, 1] range, NaNs, and the -9999/-999
/// sentinel codes all become null so they cannot contaminate aggregates.
fn cleaned_readings() -> Expr {
    let readings = col(SOIL_MOISTURE_COL);
    let valid = readings
        .clone()
        .is_not_nan()
        .and(readings.clone().gt_eq(lit(sentinels::VALID_MIN)))
        .and(readings.clone().lt_eq(lit(sentinels::VALID_MAX)))
        .and(readings.clone().neq(lit(sentinels::MISSING_LONG)))
        .and(readings.clone().neq(lit(sentinels::MISSING_SHORT)));

    when(valid)
        .then(readings)
        .otherwise(lit(NULL))
        .alias(SOIL_MOISTURE_COL)
}

/// Resample the cube to one row per sensor with daily ISO-date columns
pub fn daily_time_series(cube: DataFrame, statistic: Statistic) -> Result<DataFrame> {
    let daily = cube
        .lazy()
        .with_column(cleaned_readings())
        .with_column(
            col(DATE_TIME_COL)
                .dt()
                .to_string("%Y-%m-%d")
                .alias("date"),
        )
        .group_by([col(SENSOR_ID_COL), col("date")])
        .agg([statistic.aggregation()])
        .sort([SENSOR_ID_COL, "date"], Default::default())
        .collect()?;

    let wide = pivot_stable(
        &daily,
        ["date"],
        Some([SENSOR_ID_COL]),
        Some([SOIL_MOISTURE_COL]),
        true,
        None,
        None,
    )?;

    info!(
        "daily {} series: {} sensors x {} days",
        statistic,
        wide.height(),
        wide.width().saturating_sub(1)
    );
    Ok(wide)
}

/// Write the wide daily table as CSV
pub fn write_daily_csv(mut table: DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    CsvWriter::new(&mut file).finish(&mut table)?;
    Ok(())
}
