//! Geospatial export of the sensor inventory.
//!
//! Point-geometry writers for GeoJSON, ESRI Shapefile, and GeoPackage.
//! All three emit WGS84 (EPSG:4326) points with the inventory attributes;
//! the shapefile writer shortens attribute names to the 10-character DBF
//! limit.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use rusqlite::{Connection, params};
use shapefile::dbase::{FieldName, FieldValue, Record as DbfRecord, TableWriterBuilder};

use crate::app::models::SensorRecord;
use crate::app::services::quality_filter::geographic_extent;
use crate::{Error, Result};

/// Write the inventory as a GeoJSON FeatureCollection
pub fn write_geojson(records: &[SensorRecord], path: &Path) -> Result<()> {
    let features: Vec<Feature> = records.iter().map(record_to_feature).collect();
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    let file =
        File::create(path).map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    serde_json::to_writer(BufWriter::new(file), &collection)
        .map_err(|e| Error::geospatial(format!("writing {}", path.display()), Some(e.into())))?;
    Ok(())
}

fn record_to_feature(record: &SensorRecord) -> Feature {
    // GeoJSON positions are [longitude, latitude]
    let geometry = Geometry::new(Value::Point(vec![record.longitude, record.latitude]));

    let mut properties = JsonObject::new();
    properties.insert(
        "Sensor_ID".to_string(),
        JsonValue::from(record.sensor_id.clone()),
    );
    properties.insert(
        "Station_ID".to_string(),
        JsonValue::from(record.station_id.clone()),
    );
    properties.insert(
        "Network_ID".to_string(),
        JsonValue::from(record.network_id.clone()),
    );
    properties.insert(
        "Network_Name".to_string(),
        JsonValue::from(record.network_name.clone()),
    );
    properties.insert("Latitude".to_string(), JsonValue::from(record.latitude));
    properties.insert("Longitude".to_string(), JsonValue::from(record.longitude));
    properties.insert(
        "File_Path".to_string(),
        JsonValue::from(record.file_path.clone()),
    );
    properties.insert(
        "Coordinate_Source".to_string(),
        JsonValue::from(record.coordinate_source.as_str()),
    );

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Write the inventory as an ESRI Shapefile
///
/// Attribute names are shortened to fit the DBF 10-character limit.
pub fn write_shapefile(records: &[SensorRecord], path: &Path) -> Result<()> {
    let table = TableWriterBuilder::new()
        .add_character_field(dbf_field("SENSOR_ID")?, 80)
        .add_character_field(dbf_field("STATION_ID")?, 80)
        .add_character_field(dbf_field("NETWORK_ID")?, 80)
        .add_character_field(dbf_field("NETWORK_NM")?, 80)
        .add_numeric_field(dbf_field("LATITUDE")?, 18, 7)
        .add_numeric_field(dbf_field("LONGITUDE")?, 18, 7)
        .add_character_field(dbf_field("FILE_PATH")?, 254)
        .add_character_field(dbf_field("COORD_SRC")?, 20);

    let mut writer = shapefile::Writer::from_path(path, table)
        .map_err(|e| Error::geospatial(format!("creating {}", path.display()), Some(e.into())))?;

    for record in records {
        let mut row = DbfRecord::default();
        row.insert(
            "SENSOR_ID".to_string(),
            FieldValue::Character(Some(record.sensor_id.clone())),
        );
        row.insert(
            "STATION_ID".to_string(),
            FieldValue::Character(Some(record.station_id.clone())),
        );
        row.insert(
            "NETWORK_ID".to_string(),
            FieldValue::Character(Some(record.network_id.clone())),
        );
        row.insert(
            "NETWORK_NM".to_string(),
            FieldValue::Character(Some(record.network_name.clone())),
        );
        row.insert(
            "LATITUDE".to_string(),
            FieldValue::Numeric(Some(record.latitude)),
        );
        row.insert(
            "LONGITUDE".to_string(),
            FieldValue::Numeric(Some(record.longitude)),
        );
        row.insert(
            "FILE_PATH".to_string(),
            FieldValue::Character(Some(record.file_path.clone())),
        );
        row.insert(
            "COORD_SRC".to_string(),
            FieldValue::Character(Some(record.coordinate_source.as_str().to_string())),
        );

        let point = shapefile::Point::new(record.longitude, record.latitude);
        writer
            .write_shape_and_record(&point, &row)
            .map_err(|e| Error::geospatial("writing shapefile record", Some(e.into())))?;
    }

    Ok(())
}

fn dbf_field(name: &str) -> Result<FieldName> {
    FieldName::try_from(name)
        .map_err(|_| Error::geospatial(format!("invalid DBF field name {name}"), None))
}

/// Write the inventory as a GeoPackage
///
/// Creates the mandated `gpkg_*` metadata tables and one feature table of
/// standard GeoPackage point blobs (GP header + little-endian WKB).
pub fn write_geopackage(records: &[SensorRecord], path: &Path) -> Result<()> {
    // SQLite appends to existing databases; exports replace
    if path.exists() {
        std::fs::remove_file(path)
            .map_err(|e| Error::io(format!("replacing {}", path.display()), e))?;
    }

    let conn = Connection::open(path)
        .map_err(|e| Error::geospatial(format!("creating {}", path.display()), Some(e.into())))?;

    conn.execute_batch(
        r#"
        PRAGMA application_id = 0x47504B47;
        PRAGMA user_version = 10300;

        CREATE TABLE gpkg_spatial_ref_sys (
            srs_name TEXT NOT NULL,
            srs_id INTEGER PRIMARY KEY,
            organization TEXT NOT NULL,
            organization_coordsys_id INTEGER NOT NULL,
            definition TEXT NOT NULL,
            description TEXT
        );
        INSERT INTO gpkg_spatial_ref_sys VALUES
            ('Undefined Cartesian', -1, 'NONE', -1, 'undefined', NULL),
            ('Undefined Geographic', 0, 'NONE', 0, 'undefined', NULL),
            ('WGS 84', 4326, 'EPSG', 4326,
             'GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]',
             NULL);

        CREATE TABLE gpkg_contents (
            table_name TEXT NOT NULL PRIMARY KEY,
            data_type TEXT NOT NULL,
            identifier TEXT UNIQUE,
            description TEXT DEFAULT '',
            last_change DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now')),
            min_x DOUBLE, min_y DOUBLE, max_x DOUBLE, max_y DOUBLE,
            srs_id INTEGER
        );

        CREATE TABLE gpkg_geometry_columns (
            table_name TEXT NOT NULL,
            column_name TEXT NOT NULL,
            geometry_type_name TEXT NOT NULL,
            srs_id INTEGER NOT NULL,
            z TINYINT NOT NULL,
            m TINYINT NOT NULL,
            PRIMARY KEY (table_name, column_name)
        );

        CREATE TABLE sensors (
            fid INTEGER PRIMARY KEY AUTOINCREMENT,
            geom POINT,
            Sensor_ID TEXT,
            Station_ID TEXT,
            Network_ID TEXT,
            Network_Name TEXT,
            Latitude DOUBLE,
            Longitude DOUBLE,
            File_Path TEXT,
            Coordinate_Source TEXT
        );
        "#,
    )
    .map_err(|e| Error::geospatial("initializing GeoPackage schema", Some(e.into())))?;

    let (lat_min, lat_max, lon_min, lon_max) =
        geographic_extent(records).unwrap_or((0.0, 0.0, 0.0, 0.0));

    conn.execute(
        "INSERT INTO gpkg_contents
            (table_name, data_type, identifier, min_x, min_y, max_x, max_y, srs_id)
         VALUES ('sensors', 'features', 'sensors', ?1, ?2, ?3, ?4, 4326)",
        params![lon_min, lat_min, lon_max, lat_max],
    )
    .map_err(|e| Error::geospatial("registering GeoPackage contents", Some(e.into())))?;

    conn.execute(
        "INSERT INTO gpkg_geometry_columns VALUES ('sensors', 'geom', 'POINT', 4326, 0, 0)",
        [],
    )
    .map_err(|e| Error::geospatial("registering GeoPackage geometry", Some(e.into())))?;

    let mut insert = conn
        .prepare(
            "INSERT INTO sensors
                (geom, Sensor_ID, Station_ID, Network_ID, Network_Name,
                 Latitude, Longitude, File_Path, Coordinate_Source)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .map_err(|e| Error::geospatial("preparing GeoPackage insert", Some(e.into())))?;

    for record in records {
        insert
            .execute(params![
                gpkg_point_blob(record.longitude, record.latitude),
                record.sensor_id,
                record.station_id,
                record.network_id,
                record.network_name,
                record.latitude,
                record.longitude,
                record.file_path,
                record.coordinate_source.as_str(),
            ])
            .map_err(|e| Error::geospatial("writing GeoPackage record", Some(e.into())))?;
    }

    Ok(())
}

/// Encode one point as a GeoPackage geometry blob
///
/// Layout: "GP" magic, version 0, flags (little-endian, no envelope),
/// srs_id, then WKB point.
fn gpkg_point_blob(lon: f64, lat: f64) -> Vec<u8> {
    let mut blob = Vec::with_capacity(29);
    blob.extend_from_slice(b"GP");
    blob.push(0);
    blob.push(0b0000_0001);
    blob.extend_from_slice(&4326i32.to_le_bytes());
    blob.push(1); // WKB byte order: little-endian
    blob.extend_from_slice(&1u32.to_le_bytes()); // WKB geometry type: Point
    blob.extend_from_slice(&lon.to_le_bytes());
    blob.extend_from_slice(&lat.to_le_bytes());
    blob
}
