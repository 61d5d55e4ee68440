use std::path::{Path, PathBuf};

use crate::common::errors::Result;

/// Port for the filesystem reads the trash core performs.
///
/// Injected explicitly wherever it is needed so tests can substitute an
/// in-memory fake. Probe methods answer `false` instead of failing: a
/// candidate that cannot be probed (permission denied, missing, not a
/// directory) is treated as absent, never as an error.
pub trait FileSystemReader: Send + Sync {
    /// Reads a file as UTF-8 text, failing with an I/O error when the file
    /// is unreadable or missing
    fn contents_of(&self, path: &Path) -> Result<String>;

    /// Whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory with the sticky bit set
    fn is_sticky_dir(&self, path: &Path) -> bool;

    /// Whether `path` is itself a symbolic link
    fn is_symlink(&self, path: &Path) -> bool;

    /// Lists directory entries as full paths, failing with an I/O error
    /// when the directory cannot be read
    fn entries_of(&self, path: &Path) -> Result<Vec<PathBuf>>;
}
