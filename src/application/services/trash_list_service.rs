use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::dtos::trash_dto::{ListOptions, ListWarning, TrashListReport, TrashedEntryDto};
use crate::application::ports::trash_ports::TrashListUseCase;
use crate::application::services::harvester::{HarvestEvent, Harvester};
use crate::application::services::trash_dirs_selector::TrashDirsSelector;
use crate::common::config::AppConfig;
use crate::common::errors::Result;
use crate::domain::entities::trash_directory::ScanEvent;
use crate::domain::repositories::file_system_reader::FileSystemReader;
use crate::domain::services::trash_info_parser;

/// Application service tying discovery and decoding together.
///
/// Drives the selector, harvests each trusted directory and decodes every
/// metadata file, collecting per-record outcomes. Partial failure is the
/// normal case: a record that cannot be read or parsed becomes a warning and
/// enumeration continues.
pub struct TrashListService {
    selector: TrashDirsSelector,
    harvester: Harvester,
    fs: Arc<dyn FileSystemReader>,
    config: AppConfig,
}

impl TrashListService {
    pub fn new(
        selector: TrashDirsSelector,
        harvester: Harvester,
        fs: Arc<dyn FileSystemReader>,
        config: AppConfig,
    ) -> Self {
        Self {
            selector,
            harvester,
            fs,
            config,
        }
    }

    fn harvest_directory(&self, trash_dir: &Path, volume: &Path, report: &mut TrashListReport) {
        let mut current_volume = volume.to_path_buf();
        for event in self.harvester.harvest(trash_dir, volume) {
            match event {
                HarvestEvent::VolumeAnnounced(volume) => current_volume = volume,
                HarvestEvent::TrashInfoFound(info_path) => {
                    self.decode_record(&info_path, &current_volume, report)
                }
            }
        }
    }

    fn decode_record(&self, info_path: &Path, volume: &Path, report: &mut TrashListReport) {
        let contents = match self.fs.contents_of(info_path) {
            Ok(contents) => contents,
            Err(error) => {
                debug!(path = %info_path.display(), %error, "Unreadable trashinfo file");
                report.warnings.push(ListWarning::ReadError {
                    path: info_path.to_path_buf(),
                    message: error.message,
                });
                return;
            }
        };

        match trash_info_parser::parse_record(&contents, volume) {
            Ok(record) => report.entries.push(TrashedEntryDto {
                deletion_date: record.deletion_date.to_string(),
                original_path: record.original_path,
            }),
            Err(error) => {
                debug!(path = %info_path.display(), %error, "Undecodable trashinfo file");
                report.warnings.push(ListWarning::ParsePathError {
                    path: info_path.to_path_buf(),
                });
            }
        }
    }
}

impl TrashListUseCase for TrashListService {
    #[instrument(skip(self))]
    fn list_trash(&self, options: &ListOptions) -> Result<TrashListReport> {
        let mut report = TrashListReport::default();
        let events = self.selector.select(
            options.all_users,
            &options.trash_dirs,
            &self.config.environment,
            self.config.uid,
        );

        for event in events {
            match event {
                ScanEvent::Found { path, volume } => {
                    self.harvest_directory(&path, &volume, &mut report)
                }
                ScanEvent::SkippedNotSticky { path } => {
                    report.warnings.push(ListWarning::TopTrashDirNotSticky { path })
                }
                ScanEvent::SkippedSymlink { path } => {
                    report.warnings.push(ListWarning::TopTrashDirSymlink { path })
                }
            }
        }

        debug!(
            entries = report.entries.len(),
            warnings = report.warnings.len(),
            "Trash listing completed"
        );
        Ok(report)
    }
}
