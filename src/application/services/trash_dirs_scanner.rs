use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::common::config::TrashEnvironment;
use crate::domain::entities::trash_directory::{ScanEvent, TrashDirectoryCandidate};
use crate::domain::repositories::file_system_reader::FileSystemReader;
use crate::domain::repositories::mount_point_provider::MountPointProvider;

/// Seam for trash directory scanning, so the selector can be exercised with
/// canned event sequences in tests
pub trait TrashDirsScan: Send + Sync {
    /// Lazily enumerates trusted trash directory candidates as scan events
    fn scan_trash_dirs<'a>(
        &'a self,
        environment: &TrashEnvironment,
        uid: u32,
    ) -> Box<dyn Iterator<Item = ScanEvent> + 'a>;
}

/// Which users' top-level trash directories the scanner considers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Only candidates keyed by the supplied uid
    CurrentUser,
    /// Every uid with on-disk evidence on each volume
    AllUsers,
}

/// Enumerates trash directory candidates per volume and per user.
///
/// The home trash directory is always yielded first as `Found` with no
/// security check; it is owned by the user. Each volume then contributes two
/// top-level candidate forms, the checked shared form before the
/// unconditional per-user form. A candidate that cannot be probed is treated
/// as absent, never as an error, so a scan never aborts because one volume is
/// unreadable.
pub struct TrashDirsScanner {
    fs: Arc<dyn FileSystemReader>,
    mounts: Arc<dyn MountPointProvider>,
    mode: ScanMode,
}

impl TrashDirsScanner {
    pub fn new(
        fs: Arc<dyn FileSystemReader>,
        mounts: Arc<dyn MountPointProvider>,
        mode: ScanMode,
    ) -> Self {
        Self { fs, mounts, mode }
    }

    /// Scanner restricted to the calling user's candidates
    pub fn for_current_user(
        fs: Arc<dyn FileSystemReader>,
        mounts: Arc<dyn MountPointProvider>,
    ) -> Self {
        Self::new(fs, mounts, ScanMode::CurrentUser)
    }

    /// Scanner enumerating candidates across all users
    pub fn for_all_users(
        fs: Arc<dyn FileSystemReader>,
        mounts: Arc<dyn MountPointProvider>,
    ) -> Self {
        Self::new(fs, mounts, ScanMode::AllUsers)
    }

    fn scan_volume(&self, volume: &Path, uid: u32) -> Vec<ScanEvent> {
        debug!(volume = %volume.display(), "Scanning volume for trash directories");
        let mut events = Vec::new();
        match self.mode {
            ScanMode::CurrentUser => {
                self.check_shared_candidate(volume, uid, &mut events);
                self.check_per_user_candidate(volume, uid, &mut events);
            }
            ScanMode::AllUsers => {
                self.scan_all_shared_candidates(volume, &mut events);
                self.scan_all_per_user_candidates(volume, &mut events);
            }
        }
        events
    }

    /// Evaluates `<volume>/.Trash/<uid>`.
    ///
    /// The parent `<volume>/.Trash` must not be a symlink and must carry the
    /// sticky bit before the candidate is trusted; otherwise an unprivileged
    /// actor could plant a trap directory on a shared volume. The symlink
    /// check runs first, so it wins when both violations apply.
    fn check_shared_candidate(&self, volume: &Path, uid: u32, events: &mut Vec<ScanEvent>) {
        let parent = volume.join(".Trash");
        let candidate = parent.join(uid.to_string());
        if !self.fs.is_dir(&candidate) {
            return;
        }
        if self.fs.is_symlink(&parent) {
            warn!(path = %candidate.display(), "Top trash dir skipped, parent is a symlink");
            events.push(ScanEvent::SkippedSymlink { path: candidate });
        } else if !self.fs.is_sticky_dir(&parent) {
            warn!(path = %candidate.display(), "Top trash dir skipped, parent not sticky");
            events.push(ScanEvent::SkippedNotSticky { path: candidate });
        } else {
            events.push(TrashDirectoryCandidate::top_level(candidate, volume).into_found());
        }
    }

    /// Evaluates `<volume>/.Trash-<uid>`: trusted unconditionally if present
    fn check_per_user_candidate(&self, volume: &Path, uid: u32, events: &mut Vec<ScanEvent>) {
        let candidate = volume.join(format!(".Trash-{}", uid));
        if self.fs.is_dir(&candidate) {
            events.push(TrashDirectoryCandidate::top_level(candidate, volume).into_found());
        }
    }

    /// All-users form of the shared candidate: every subdirectory of
    /// `<volume>/.Trash`, each put through the same parent check
    fn scan_all_shared_candidates(&self, volume: &Path, events: &mut Vec<ScanEvent>) {
        let parent = volume.join(".Trash");
        if !self.fs.is_dir(&parent) {
            return;
        }
        let mut entries = self.fs.entries_of(&parent).unwrap_or_default();
        entries.sort();
        for candidate in entries {
            if !self.fs.is_dir(&candidate) {
                continue;
            }
            if self.fs.is_symlink(&parent) {
                events.push(ScanEvent::SkippedSymlink { path: candidate });
            } else if !self.fs.is_sticky_dir(&parent) {
                events.push(ScanEvent::SkippedNotSticky { path: candidate });
            } else {
                events.push(TrashDirectoryCandidate::top_level(candidate, volume).into_found());
            }
        }
    }

    /// All-users form of the per-user candidate: every `.Trash-<uid>` sibling
    /// whose suffix parses as a uid
    fn scan_all_per_user_candidates(&self, volume: &Path, events: &mut Vec<ScanEvent>) {
        let mut entries = self.fs.entries_of(volume).unwrap_or_default();
        entries.sort();
        for candidate in entries {
            let Some(name) = candidate.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(suffix) = name.strip_prefix(".Trash-") else {
                continue;
            };
            if suffix.parse::<u32>().is_ok() && self.fs.is_dir(&candidate) {
                events.push(TrashDirectoryCandidate::top_level(candidate, volume).into_found());
            }
        }
    }
}

impl TrashDirsScan for TrashDirsScanner {
    #[instrument(skip(self, environment))]
    fn scan_trash_dirs<'a>(
        &'a self,
        environment: &TrashEnvironment,
        uid: u32,
    ) -> Box<dyn Iterator<Item = ScanEvent> + 'a> {
        let home = environment.home_trash_dir().map(|path| {
            let candidate = TrashDirectoryCandidate::home(path);
            debug!(path = %candidate.path.display(), origin = ?candidate.origin, "Home trash candidate");
            candidate.into_found()
        });
        let volumes = self.mounts.list_mount_points();

        Box::new(home.into_iter().chain(
            volumes
                .into_iter()
                .flat_map(move |volume| self.scan_volume(&volume, uid)),
        ))
    }
}
