use std::path::{Path, PathBuf};

/// Where a trash directory candidate comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashDirOrigin {
    /// The per-user trash directory under the user's home
    Home,
    /// A trash directory at a volume's top level, shared among users
    SharedTopLevel,
}

/// A trash directory under consideration, before or after security checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashDirectoryCandidate {
    /// Location of the trash directory itself
    pub path: PathBuf,
    /// Mount path of the volume owning this directory
    pub volume: PathBuf,
    pub origin: TrashDirOrigin,
}

impl TrashDirectoryCandidate {
    /// The home trash directory; its volume is the root filesystem
    pub fn home(path: PathBuf) -> Self {
        Self {
            path,
            volume: PathBuf::from("/"),
            origin: TrashDirOrigin::Home,
        }
    }

    /// A top-level directory on the given volume
    pub fn top_level(path: PathBuf, volume: &Path) -> Self {
        Self {
            path,
            volume: volume.to_path_buf(),
            origin: TrashDirOrigin::SharedTopLevel,
        }
    }

    /// Consumes the candidate into a `Found` scan event
    pub fn into_found(self) -> ScanEvent {
        ScanEvent::Found {
            path: self.path,
            volume: self.volume,
        }
    }
}

/// Outcome of evaluating one trash directory candidate.
///
/// Security-check failures are events, not errors: a shared top-level
/// directory whose parent fails the sticky or symlink check is reported so
/// the caller can surface it, and scanning continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A trusted trash directory, ready to be harvested
    Found { path: PathBuf, volume: PathBuf },
    /// Shared top-level candidate rejected: parent lacks the sticky bit
    SkippedNotSticky { path: PathBuf },
    /// Shared top-level candidate rejected: parent is a symbolic link
    SkippedSymlink { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_candidate_volume_is_root() {
        let candidate = TrashDirectoryCandidate::home(PathBuf::from("/home/alice/.local/share/Trash"));

        assert_eq!(candidate.volume, PathBuf::from("/"));
        assert_eq!(candidate.origin, TrashDirOrigin::Home);
    }

    #[test]
    fn test_into_found_carries_path_and_volume() {
        let candidate =
            TrashDirectoryCandidate::top_level(PathBuf::from("/mnt/disk/.Trash-1000"), Path::new("/mnt/disk"));

        assert_eq!(
            candidate.into_found(),
            ScanEvent::Found {
                path: PathBuf::from("/mnt/disk/.Trash-1000"),
                volume: PathBuf::from("/mnt/disk"),
            }
        );
    }
}
