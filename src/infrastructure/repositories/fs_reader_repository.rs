use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::errors::{DomainError, Result};
use crate::domain::repositories::file_system_reader::FileSystemReader;

/// [`FileSystemReader`] backed by the real filesystem.
///
/// Probe methods treat any metadata error as a plain `false`: a directory we
/// cannot stat is a directory we cannot list, and the scanner treats both the
/// same way.
pub struct FsReaderRepository;

impl FsReaderRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsReaderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader for FsReaderRepository {
    fn contents_of(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            DomainError::io_error("TrashInfo", format!("{}: '{}'", e, path.display()))
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_sticky_dir(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(metadata) => metadata.is_dir() && metadata.mode() & 0o1000 != 0,
            Err(_) => false,
        }
    }

    fn is_symlink(&self, path: &Path) -> bool {
        match fs::symlink_metadata(path) {
            Ok(metadata) => metadata.file_type().is_symlink(),
            Err(_) => false,
        }
    }

    fn entries_of(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let read_dir = fs::read_dir(path).map_err(|e| {
            debug!("Unable to list {}: {}", path.display(), e);
            DomainError::io_error("TrashDir", format!("{}: '{}'", e, path.display()))
        })?;
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| {
                DomainError::io_error("TrashDir", format!("{}: '{}'", e, path.display()))
            })?;
            entries.push(entry.path());
        }
        Ok(entries)
    }
}
