use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::trash_dirs_scanner::{TrashDirsScan, TrashDirsScanner};
use crate::common::config::TrashEnvironment;
use crate::domain::entities::trash_directory::ScanEvent;
use crate::domain::repositories::file_system_reader::FileSystemReader;
use crate::domain::repositories::mount_point_provider::MountPointProvider;

/// Chooses between explicitly user-specified trash directories and the
/// scanners' output.
///
/// Exactly one of three mutually exclusive rules applies, in order: explicit
/// directories always win, then the all-users scanner, then the current-user
/// scanner.
pub struct TrashDirsSelector {
    current_user_scanner: Box<dyn TrashDirsScan>,
    all_users_scanner: Box<dyn TrashDirsScan>,
    mounts: Arc<dyn MountPointProvider>,
}

impl TrashDirsSelector {
    pub fn new(
        current_user_scanner: Box<dyn TrashDirsScan>,
        all_users_scanner: Box<dyn TrashDirsScan>,
        mounts: Arc<dyn MountPointProvider>,
    ) -> Self {
        Self {
            current_user_scanner,
            all_users_scanner,
            mounts,
        }
    }

    /// Builds the selector with both scanner configurations over the same
    /// injected collaborators
    pub fn with_readers(
        fs: Arc<dyn FileSystemReader>,
        mounts: Arc<dyn MountPointProvider>,
    ) -> Self {
        Self::new(
            Box::new(TrashDirsScanner::for_current_user(fs.clone(), mounts.clone())),
            Box::new(TrashDirsScanner::for_all_users(fs, mounts.clone())),
            mounts,
        )
    }

    /// Selects the sequence of trash directories to harvest.
    ///
    /// Non-empty `user_specified_dirs` bypass scanning entirely and yield one
    /// `Found` per entry, volume resolved by mount-point prefix, regardless
    /// of `select_all_users`.
    pub fn select<'a>(
        &'a self,
        select_all_users: bool,
        user_specified_dirs: &[PathBuf],
        environment: &TrashEnvironment,
        uid: u32,
    ) -> Box<dyn Iterator<Item = ScanEvent> + 'a> {
        if !user_specified_dirs.is_empty() {
            debug!(
                count = user_specified_dirs.len(),
                "Using explicitly selected trash directories"
            );
            let dirs = user_specified_dirs.to_vec();
            return Box::new(dirs.into_iter().map(move |dir| {
                let volume = self.mounts.volume_of(&dir);
                ScanEvent::Found { path: dir, volume }
            }));
        }
        if select_all_users {
            return self.all_users_scanner.scan_trash_dirs(environment, uid);
        }
        self.current_user_scanner.scan_trash_dirs(environment, uid)
    }
}
