//! Hand-written in-memory fakes for the filesystem and mount-point ports,
//! shared by the service tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::common::errors::{DomainError, Result};
use crate::domain::repositories::file_system_reader::FileSystemReader;
use crate::domain::repositories::mount_point_provider::MountPointProvider;

/// In-memory filesystem fake.
///
/// Registering a file or directory implicitly registers its ancestors as
/// directories. Sticky bits, symlinks and unreadable paths are opt-in per
/// path.
pub struct InMemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Mutex<HashSet<PathBuf>>,
    sticky: Mutex<HashSet<PathBuf>>,
    symlinks: Mutex<HashSet<PathBuf>>,
    unreadable: Mutex<HashSet<PathBuf>>,
}

impl InMemoryFileSystem {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            dirs: Mutex::new(HashSet::new()),
            sticky: Mutex::new(HashSet::new()),
            symlinks: Mutex::new(HashSet::new()),
            unreadable: Mutex::new(HashSet::new()),
        }
    }

    pub fn add_file(&self, path: &str, contents: &str) {
        let path = PathBuf::from(path);
        self.register_ancestors(&path);
        self.files.lock().unwrap().insert(path, contents.to_string());
    }

    pub fn add_dir(&self, path: &str) {
        let path = PathBuf::from(path);
        self.register_ancestors(&path);
        self.dirs.lock().unwrap().insert(path);
    }

    /// Marks an existing directory as carrying the sticky bit
    pub fn set_sticky(&self, path: &str) {
        self.sticky.lock().unwrap().insert(PathBuf::from(path));
    }

    /// Marks a path as being a symbolic link (it still lists as a directory)
    pub fn set_symlink(&self, path: &str) {
        self.symlinks.lock().unwrap().insert(PathBuf::from(path));
    }

    /// Makes reads of this file fail with an I/O error
    pub fn set_unreadable(&self, path: &str) {
        self.unreadable.lock().unwrap().insert(PathBuf::from(path));
    }

    fn register_ancestors(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = path.parent();
        while let Some(dir) = current {
            dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl FileSystemReader for InMemoryFileSystem {
    fn contents_of(&self, path: &Path) -> Result<String> {
        if self.unreadable.lock().unwrap().contains(path) {
            return Err(DomainError::io_error(
                "TrashInfo",
                format!("[Errno 13] Permission denied: '{}'", path.display()),
            ));
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                DomainError::io_error(
                    "TrashInfo",
                    format!("[Errno 2] No such file or directory: '{}'", path.display()),
                )
            })
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn is_sticky_dir(&self, path: &Path) -> bool {
        self.is_dir(path) && self.sticky.lock().unwrap().contains(path)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        self.symlinks.lock().unwrap().contains(path)
    }

    fn entries_of(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !self.is_dir(path) {
            return Err(DomainError::io_error(
                "TrashDir",
                format!("[Errno 2] No such file or directory: '{}'", path.display()),
            ));
        }
        let files = self.files.lock().unwrap();
        let dirs = self.dirs.lock().unwrap();
        let mut entries: Vec<PathBuf> = files
            .keys()
            .chain(dirs.iter())
            .filter(|entry| entry.parent() == Some(path))
            .cloned()
            .collect();
        entries.sort();
        entries.dedup();
        Ok(entries)
    }
}

/// Mount-point provider fake yielding a fixed volume list
pub struct StaticMounts(pub Vec<PathBuf>);

impl StaticMounts {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn of(paths: &[&str]) -> Self {
        Self(paths.iter().map(PathBuf::from).collect())
    }
}

impl MountPointProvider for StaticMounts {
    fn list_mount_points(&self) -> Vec<PathBuf> {
        self.0.clone()
    }
}
