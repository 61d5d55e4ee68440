//! Decoding of trashinfo metadata blobs.
//!
//! The on-disk format is UTF-8 text starting with a `[Trash Info]` header,
//! followed by a `Path=` line holding a percent-encoded original path and a
//! `DeletionDate=` line holding a local-time `YYYY-MM-DDTHH:MM:SS` timestamp.
//!
//! The two fields fail asymmetrically: a record without a decodable path is
//! useless and produces a hard [`ParseFailure`](crate::common::errors::ErrorKind),
//! while a missing or garbled date degrades to [`DeletionDate::Unknown`] and
//! the record remains listable.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::common::errors::{DomainError, Result};
use crate::domain::entities::trash_info::{DeletionDate, TrashInfoRecord};

const PATH_KEY: &str = "Path=";
const DELETION_DATE_KEY: &str = "DeletionDate=";
const DELETION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Extracts and percent-decodes the original path.
///
/// Fails with a parse error when no `Path=` line exists; that record is
/// invalid and must be reported, without stopping enumeration of the rest.
pub fn extract_path(raw: &str) -> Result<String> {
    line_value(raw, PATH_KEY)
        .map(percent_decode)
        .ok_or_else(|| DomainError::parse_error("TrashInfo", "Unable to parse Path"))
}

/// Extracts the deletion date, never failing.
///
/// Returns [`DeletionDate::Unknown`] when the `DeletionDate=` line is missing
/// or its value does not match `YYYY-MM-DDTHH:MM:SS`.
pub fn extract_deletion_date(raw: &str) -> DeletionDate {
    match line_value(raw, DELETION_DATE_KEY) {
        Some(value) => match NaiveDateTime::parse_from_str(value, DELETION_DATE_FORMAT) {
            Ok(date) => DeletionDate::Known(date),
            Err(_) => DeletionDate::Unknown,
        },
        None => DeletionDate::Unknown,
    }
}

/// Resolves the absolute original location of a trashed item.
///
/// Joins the decoded path onto the volume root; a decoded path that is
/// already absolute replaces the root, which is exactly right for home trash
/// entries. Propagates the parse error from [`extract_path`] unchanged.
pub fn original_location(raw: &str, volume_root: &Path) -> Result<PathBuf> {
    let relative = extract_path(raw)?;
    Ok(volume_root.join(relative))
}

/// Decodes a full record against its owning volume: required original
/// location plus best-effort date.
pub fn parse_record(raw: &str, volume_root: &Path) -> Result<TrashInfoRecord> {
    Ok(TrashInfoRecord {
        original_path: original_location(raw, volume_root)?,
        deletion_date: extract_deletion_date(raw),
    })
}

/// Finds the first line starting with `key` and returns the remainder,
/// stripped of a trailing carriage return.
fn line_value<'a>(raw: &'a str, key: &str) -> Option<&'a str> {
    raw.lines()
        .find_map(|line| line.strip_prefix(key))
        .map(|value| value.trim_end_matches('\r'))
}

/// Reverses percent-encoding: each `%XX` triplet becomes the corresponding
/// byte. Malformed escapes are kept literally; byte sequences that are not
/// valid UTF-8 are replaced lossily.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                decoded.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}
