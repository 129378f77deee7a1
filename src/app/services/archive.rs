//! Archive member access for ISMN zip distributions.
//!
//! Opens the distribution archive, lists the members that look like sensor
//! files, and decodes member bodies. Undecodable bytes are replaced rather
//! than rejected: real archives routinely carry mojibake in station names.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};
use zip::ZipArchive;

use crate::app::models::SensorFile;
use crate::constants::{SENSOR_FILE_EXTENSIONS, SOIL_MOISTURE_MARKER};
use crate::{Error, Result};

/// Open the distribution archive for reading
///
/// A missing archive is the one fatal error of a run: it aborts before any
/// per-file processing begins.
pub fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    if !path.exists() {
        return Err(Error::archive_not_found(path));
    }

    let file = File::open(path).map_err(|e| Error::io(format!("opening {}", path.display()), e))?;
    let archive = ZipArchive::new(file)
        .map_err(|e| Error::archive(format!("reading {}", path.display()), e))?;

    debug!(
        "opened {} with {} members",
        path.display(),
        archive.len()
    );
    Ok(archive)
}

/// Decide whether an archive member looks like a sensor file
///
/// Directories are excluded; files qualify by extension (`.stm`, `.csv`)
/// or by the `sm_` soil-moisture marker anywhere in the lowercased path.
pub fn is_sensor_file(member_name: &str) -> bool {
    if member_name.ends_with('/') {
        return false;
    }

    let lowered = member_name.to_lowercase();
    SENSOR_FILE_EXTENSIONS
        .iter()
        .any(|ext| member_name.ends_with(ext))
        || lowered.contains(SOIL_MOISTURE_MARKER)
}

/// List eligible sensor-file members in archive order
pub fn list_sensor_files(archive: &ZipArchive<File>) -> Vec<String> {
    let members: Vec<String> = archive
        .file_names()
        .filter(|name| is_sensor_file(name))
        .map(str::to_owned)
        .collect();

    info!("found {} sensor files in archive", members.len());
    members
}

/// Read one member and decode its body as text
///
/// Decoding is lossy: invalid UTF-8 sequences become replacement
/// characters so a corrupt header cannot take down the member.
pub fn read_sensor_file(archive: &mut ZipArchive<File>, member_name: &str) -> Result<SensorFile> {
    let mut member = archive
        .by_name(member_name)
        .map_err(|e| Error::archive(format!("member {member_name}"), e))?;

    let mut raw = Vec::new();
    member
        .read_to_end(&mut raw)
        .map_err(|e| Error::io(format!("reading member {member_name}"), e))?;

    let lines = String::from_utf8_lossy(&raw)
        .split('\n')
        .map(str::to_owned)
        .collect();

    Ok(SensorFile {
        archive_path: member_name.to_string(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_by_extension() {
        assert!(is_sensor_file("SCAN/Little_River/data.stm"));
        assert!(is_sensor_file("SCAN/Little_River/data.csv"));
        assert!(!is_sensor_file("SCAN/Little_River/readme.txt"));
    }

    #[test]
    fn eligibility_by_soil_moisture_marker() {
        assert!(is_sensor_file("SCAN/Little_River/SM_profile.dat"));
        assert!(is_sensor_file("net/sta/sm_0.05.dat"));
    }

    #[test]
    fn directories_are_never_eligible() {
        assert!(!is_sensor_file("SCAN/Little_River/"));
        assert!(!is_sensor_file("sm_network/"));
    }

    #[test]
    fn missing_archive_is_fatal() {
        let err = open_archive(Path::new("/nonexistent/archive.zip")).unwrap_err();
        assert!(matches!(err, Error::ArchiveNotFound { .. }));
    }
}
