//! Export adapters for the cleaned sensor inventory
//!
//! Thin glue between the record set and the on-disk formats. The format is
//! chosen by name from a fixed allow-list; each format implies a fixed
//! extension appended to the caller-supplied path stem. Exporting an empty
//! record set is an error: point-geometry construction is meaningless on
//! zero rows.

pub mod geospatial;
pub mod tabular;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use crate::app::models::SensorRecord;
use crate::{Error, Result};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    GeoJson,
    Shapefile,
    GeoPackage,
    Parquet,
    Csv,
}

/// Format names accepted on the command line, in display order
pub const SUPPORTED_FORMATS: &[&str] = &["geojson", "shp", "gpkg", "parquet", "csv"];

impl ExportFormat {
    /// File extension implied by the format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::GeoJson => "geojson",
            ExportFormat::Shapefile => "shp",
            ExportFormat::GeoPackage => "gpkg",
            ExportFormat::Parquet => "parquet",
            ExportFormat::Csv => "csv",
        }
    }

    /// Resolve the full output path for a caller-supplied stem
    ///
    /// The extension is appended, never substituted: a stem that already
    /// carries a dot keeps it.
    pub fn output_path(&self, stem: &Path) -> PathBuf {
        let mut path = stem.as_os_str().to_owned();
        path.push(".");
        path.push(self.extension());
        PathBuf::from(path)
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "geojson" => Ok(ExportFormat::GeoJson),
            "shp" => Ok(ExportFormat::Shapefile),
            "gpkg" => Ok(ExportFormat::GeoPackage),
            "parquet" => Ok(ExportFormat::Parquet),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(Error::unsupported_format(other, SUPPORTED_FORMATS)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write the record set to the requested format
///
/// Returns the full path written. Fails fast on an empty record set.
pub fn export_records(
    records: &[SensorRecord],
    stem: &Path,
    format: ExportFormat,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(Error::EmptyRecordSet);
    }

    let output_path = format.output_path(stem);
    match format {
        ExportFormat::Csv => tabular::write_csv(records, &output_path)?,
        ExportFormat::Parquet => tabular::write_parquet(records, &output_path)?,
        ExportFormat::GeoJson => geospatial::write_geojson(records, &output_path)?,
        ExportFormat::Shapefile => geospatial::write_shapefile(records, &output_path)?,
        ExportFormat::GeoPackage => geospatial::write_geopackage(records, &output_path)?,
    }

    info!(
        "wrote {} records to {}",
        records.len(),
        output_path.display()
    );
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_name() {
        for name in SUPPORTED_FORMATS {
            assert!(name.parse::<ExportFormat>().is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            "GeoJSON".parse::<ExportFormat>().unwrap(),
            ExportFormat::GeoJson
        );
    }

    #[test]
    fn unsupported_name_lists_the_allowed_set() {
        let err = "kml".parse::<ExportFormat>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("kml"));
        for name in SUPPORTED_FORMATS {
            assert!(message.contains(name), "error should mention {name}");
        }
    }

    #[test]
    fn extension_is_appended_to_stem() {
        let path = ExportFormat::GeoJson.output_path(Path::new("out/sensors"));
        assert_eq!(path, Path::new("out/sensors.geojson"));
    }

    #[test]
    fn empty_record_set_is_rejected() {
        let err = export_records(&[], Path::new("out/sensors"), ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, Error::EmptyRecordSet));
    }
}
