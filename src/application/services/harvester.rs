use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::repositories::file_system_reader::FileSystemReader;

/// Event stream produced while walking one trusted trash directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestEvent {
    /// The owning volume, announced exactly once before any record
    VolumeAnnounced(PathBuf),
    /// One trashinfo metadata file
    TrashInfoFound(PathBuf),
}

/// Walks a trusted trash directory's `info` subfolder and surfaces each
/// metadata file.
///
/// A missing subfolder yields zero records, not an error. Entries are sorted
/// lexicographically so runs are reproducible.
pub struct Harvester {
    fs: Arc<dyn FileSystemReader>,
}

impl Harvester {
    pub fn new(fs: Arc<dyn FileSystemReader>) -> Self {
        Self { fs }
    }

    /// Lazily iterates the metadata files of `trash_dir`; the directory is
    /// only read once the consumer pulls past the volume announcement
    pub fn harvest<'a>(
        &'a self,
        trash_dir: &Path,
        volume: &Path,
    ) -> impl Iterator<Item = HarvestEvent> + 'a {
        let info_dir = trash_dir.join("info");
        let announcement = HarvestEvent::VolumeAnnounced(volume.to_path_buf());

        std::iter::once(announcement).chain(std::iter::once(info_dir).flat_map(move |dir| {
            let mut entries = self.fs.entries_of(&dir).unwrap_or_default();
            entries.sort();
            debug!(dir = %dir.display(), count = entries.len(), "Harvesting trash metadata directory");
            entries
                .into_iter()
                .filter(|entry| entry.extension().is_some_and(|ext| ext == "trashinfo"))
                .map(HarvestEvent::TrashInfoFound)
        }))
    }
}
