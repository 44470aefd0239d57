//! Version probe.
//!
//! The distribution embeds its version as a build-time text marker inside the
//! archive. The probe reads that entry and never mutates the archive; a missing
//! or empty marker degrades to `"unknown"` rather than aborting the boot over a
//! cosmetic field.

use std::{fs::File, io::Cursor, io::Read, path::Path};

use memmap2::Mmap;
use tracing::warn;
use zip::{result::ZipError, ZipArchive};

use crate::Result;

/// Archive entry holding the build-time version marker.
pub const VERSION_MARKER: &str = "build_assets/version.txt";

/// Version string reported when the marker is absent or empty.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Extract a human-readable version string from the identified game archive.
///
/// The returned string is always non-empty. Surrounding whitespace in the marker
/// is trimmed.
///
/// ## Arguments
/// * 'archive_path' - The located game archive
///
/// # Errors
/// [`crate::Error::Io`] / [`crate::Error::Zip`] if the archive itself cannot be
/// read - a missing marker entry is not an error.
pub fn probe(archive_path: &Path) -> Result<String> {
    let file = File::open(archive_path)?;
    let mmap = unsafe { Mmap::map(&file)? };
    let mut archive = ZipArchive::new(Cursor::new(&mmap[..]))?;

    let mut raw = String::new();
    match archive.by_name(VERSION_MARKER) {
        Ok(mut entry) => {
            entry.read_to_string(&mut raw)?;
        }
        Err(ZipError::FileNotFound) => {
            warn!(
                "Version marker {} not present in {}",
                VERSION_MARKER,
                archive_path.display()
            );
            return Ok(UNKNOWN_VERSION.to_string());
        }
        Err(e) => return Err(e.into()),
    }

    let version = raw.trim();
    if version.is_empty() {
        warn!("Version marker in {} is empty", archive_path.display());
        return Ok(UNKNOWN_VERSION.to_string());
    }

    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn build_jar(dir: &Path, entries: &[(&str, &[u8])]) -> PathBuf {
        let path = dir.join("cosmic-reach.jar");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (name, data) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn reads_and_trims_marker() {
        let dir = tempfile::tempdir().unwrap();
        let jar = build_jar(dir.path(), &[(VERSION_MARKER, &b"0.5.9\n"[..])]);

        assert_eq!(probe(&jar).unwrap(), "0.5.9");
    }

    #[test]
    fn missing_marker_degrades_to_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let jar = build_jar(dir.path(), &[("some/other/Entry.class", &b"\xCA\xFE"[..])]);

        assert_eq!(probe(&jar).unwrap(), UNKNOWN_VERSION);
    }

    #[test]
    fn empty_marker_degrades_to_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let jar = build_jar(dir.path(), &[(VERSION_MARKER, &b"  \n"[..])]);

        assert_eq!(probe(&jar).unwrap(), UNKNOWN_VERSION);
    }

    #[test]
    fn unreadable_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("cosmic-reach.jar");
        std::fs::write(&bogus, b"not a zip").unwrap();

        assert!(probe(&bogus).is_err());
    }
}
