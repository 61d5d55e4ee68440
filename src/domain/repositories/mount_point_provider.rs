use std::path::{Path, PathBuf};

/// Port supplying the mount paths of real, non-pseudo filesystems.
///
/// The scanner never enumerates volumes itself; it consumes whatever finite
/// sequence the provider yields, in provider order.
pub trait MountPointProvider: Send + Sync {
    /// Mount paths to consider, in the order they should be scanned
    fn list_mount_points(&self) -> Vec<PathBuf>;

    /// Resolves the volume owning `path`: the longest listed mount point that
    /// is a prefix of it, falling back to the root filesystem.
    fn volume_of(&self, path: &Path) -> PathBuf {
        let mut best = PathBuf::from("/");
        for mount_point in self.list_mount_points() {
            if path.starts_with(&mount_point)
                && mount_point.components().count() > best.components().count()
            {
                best = mount_point;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMounts(Vec<PathBuf>);

    impl MountPointProvider for FixedMounts {
        fn list_mount_points(&self) -> Vec<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn test_volume_of_picks_longest_prefix() {
        let mounts = FixedMounts(vec![
            PathBuf::from("/"),
            PathBuf::from("/mnt"),
            PathBuf::from("/mnt/disk"),
        ]);

        assert_eq!(
            mounts.volume_of(Path::new("/mnt/disk/.Trash-1000/info/a.trashinfo")),
            PathBuf::from("/mnt/disk")
        );
        assert_eq!(mounts.volume_of(Path::new("/home/alice")), PathBuf::from("/"));
    }

    #[test]
    fn test_volume_of_defaults_to_root_with_no_mounts() {
        let mounts = FixedMounts(vec![]);
        assert_eq!(mounts.volume_of(Path::new("/anything")), PathBuf::from("/"));
    }
}
