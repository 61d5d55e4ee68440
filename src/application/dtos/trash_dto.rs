use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use serde::Serialize;

/// DTO for one listable trashed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrashedEntryDto {
    /// Display value of the deletion date; `????-??-?? ??:??:??` when unknown
    pub deletion_date: String,
    /// Absolute original location of the trashed item
    pub original_path: PathBuf,
}

/// Non-fatal condition encountered while listing.
///
/// Warnings are data, not errors: one unreadable or malformed record never
/// halts enumeration of the rest, and rejected shared trash directories are
/// reported rather than thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListWarning {
    /// Shared top-level directory skipped: parent lacks the sticky bit
    TopTrashDirNotSticky { path: PathBuf },
    /// Shared top-level directory skipped: parent is a symbolic link
    TopTrashDirSymlink { path: PathBuf },
    /// A trashinfo file could not be read
    ReadError { path: PathBuf, message: String },
    /// A trashinfo file carries no decodable original path
    ParsePathError { path: PathBuf },
}

impl Display for ListWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ListWarning::TopTrashDirNotSticky { path } => {
                write!(f, "TrashDir skipped because parent not sticky: {}", path.display())
            }
            ListWarning::TopTrashDirSymlink { path } => {
                write!(f, "TrashDir skipped because parent is symlink: {}", path.display())
            }
            ListWarning::ReadError { message, .. } => write!(f, "{}", message),
            ListWarning::ParsePathError { path } => {
                write!(f, "Parse Error: {}: Unable to parse Path.", path.display())
            }
        }
    }
}

/// Result of one listing run: entries in discovery order plus warnings
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrashListReport {
    pub entries: Vec<TrashedEntryDto>,
    pub warnings: Vec<ListWarning>,
}

/// Caller-selected listing behavior
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Enumerate trash directories of all users instead of only the caller
    pub all_users: bool,
    /// Explicitly selected trash directories; when non-empty, scanning is
    /// bypassed entirely
    pub trash_dirs: Vec<PathBuf>,
}
