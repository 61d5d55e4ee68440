use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::domain::repositories::mount_point_provider::MountPointProvider;

/// Network filesystems that count as real volumes even though their source
/// is not a block device.
const NETWORK_FSTYPES: [&str; 3] = ["nfs", "nfs4", "p9"];

/// [`MountPointProvider`] backed by `/proc/mounts`.
///
/// Only physical volumes are reported: mounts whose filesystem type is backed
/// by a `/dev` device somewhere in the table, plus a short allow-list of
/// network filesystems. Everything else (proc, sysfs, tmpfs, cgroup mounts)
/// is noise for trash discovery.
pub struct ProcMountsProvider {
    mounts_path: PathBuf,
}

impl ProcMountsProvider {
    pub fn new() -> Self {
        Self {
            mounts_path: PathBuf::from("/proc/mounts"),
        }
    }
}

impl Default for ProcMountsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MountPointProvider for ProcMountsProvider {
    fn list_mount_points(&self) -> Vec<PathBuf> {
        let table = match fs::read_to_string(&self.mounts_path) {
            Ok(table) => table,
            Err(e) => {
                warn!("Unable to read {}: {}", self.mounts_path.display(), e);
                return Vec::new();
            }
        };
        parse_mount_points(&table)
            .into_iter()
            .filter(|mount_point| mount_point.is_dir())
            .collect()
    }
}

/// One line of the mount table, already split and unescaped
struct MountEntry {
    source: String,
    mount_point: PathBuf,
    fstype: String,
}

fn parse_entries(table: &str) -> Vec<MountEntry> {
    table
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let source = fields.next()?;
            let mount_point = fields.next()?;
            let fstype = fields.next()?;
            Some(MountEntry {
                source: source.to_string(),
                mount_point: PathBuf::from(decode_octal_escapes(mount_point)),
                fstype: fstype.to_string(),
            })
        })
        .collect()
}

/// Extracts the physical mount points from the raw content of `/proc/mounts`
pub fn parse_mount_points(table: &str) -> Vec<PathBuf> {
    let entries = parse_entries(table);

    let mut physical_fstypes: HashSet<&str> =
        NETWORK_FSTYPES.iter().copied().collect();
    for entry in &entries {
        if entry.source.starts_with("/dev/") {
            physical_fstypes.insert(&entry.fstype);
        }
    }

    entries
        .iter()
        .filter(|entry| physical_fstypes.contains(entry.fstype.as_str()))
        .map(|entry| entry.mount_point.clone())
        .collect()
}

/// Decodes the `\040`-style octal escapes `/proc/mounts` uses for spaces,
/// tabs, newlines and backslashes in mount point names
fn decode_octal_escapes(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() {
            let digits = &bytes[i + 1..i + 4];
            if let Some(byte) = octal_byte(digits) {
                decoded.push(byte);
                i += 4;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn octal_byte(digits: &[u8]) -> Option<u8> {
    let mut value: u16 = 0;
    for &digit in digits {
        if !(b'0'..=b'7').contains(&digit) {
            return None;
        }
        value = value * 8 + u16::from(digit - b'0');
    }
    u8::try_from(value).ok()
}
