use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Placeholder printed when a trashinfo file carries no decodable date
pub const UNKNOWN_DATE: &str = "????-??-?? ??:??:??";

/// Deletion timestamp of a trashed item.
///
/// A missing or garbled `DeletionDate=` line degrades to `Unknown` instead of
/// failing; the record stays listable either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeletionDate {
    /// Local-time timestamp decoded from the trashinfo file
    Known(NaiveDateTime),
    /// The date line was absent or unparsable
    Unknown,
}

impl Display for DeletionDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DeletionDate::Known(date) => write!(f, "{}", date.format("%Y-%m-%d %H:%M:%S")),
            DeletionDate::Unknown => write!(f, "{}", UNKNOWN_DATE),
        }
    }
}

/// Decoded content of one trashinfo metadata file.
///
/// The original path is required; a record without one is invalid. The
/// deletion date is optional and degrades to [`DeletionDate::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashInfoRecord {
    /// Absolute original location, resolved against the owning volume
    pub original_path: PathBuf,
    /// When the item was trashed, if decodable
    pub deletion_date: DeletionDate,
}
