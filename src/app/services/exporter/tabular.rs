//! Tabular export of the sensor inventory via polars.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::app::models::SensorRecord;
use crate::{Error, Result};

/// Build the inventory DataFrame with the fixed output schema
///
/// Column order matches the published schema; `Coordinate_Source` is the
/// quality-aware provenance column.
pub fn records_to_dataframe(records: &[SensorRecord]) -> Result<DataFrame> {
    let sensor_ids: Vec<&str> = records.iter().map(|r| r.sensor_id.as_str()).collect();
    let station_ids: Vec<&str> = records.iter().map(|r| r.station_id.as_str()).collect();
    let network_ids: Vec<&str> = records.iter().map(|r| r.network_id.as_str()).collect();
    let network_names: Vec<&str> = records.iter().map(|r| r.network_name.as_str()).collect();
    let latitudes: Vec<f64> = records.iter().map(|r| r.latitude).collect();
    let longitudes: Vec<f64> = records.iter().map(|r| r.longitude).collect();
    let file_paths: Vec<&str> = records.iter().map(|r| r.file_path.as_str()).collect();
    let sources: Vec<&str> = records
        .iter()
        .map(|r| r.coordinate_source.as_str())
        .collect();

    DataFrame::new(vec![
        Column::new("Sensor_ID".into(), sensor_ids),
        Column::new("Station_ID".into(), station_ids),
        Column::new("Network_ID".into(), network_ids),
        Column::new("Network_Name".into(), network_names),
        Column::new("Latitude".into(), latitudes),
        Column::new("Longitude".into(), longitudes),
        Column::new("File_Path".into(), file_paths),
        Column::new("Coordinate_Source".into(), sources),
    ])
    .map_err(Error::from)
}

/// Write the inventory as CSV
pub fn write_csv(records: &[SensorRecord], path: &Path) -> Result<()> {
    let mut df = records_to_dataframe(records)?;
    let mut file =
        File::create(path).map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

/// Write the inventory as Parquet
pub fn write_parquet(records: &[SensorRecord], path: &Path) -> Result<()> {
    let mut df = records_to_dataframe(records)?;
    let file =
        File::create(path).map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(&mut df)?;
    Ok(())
}
