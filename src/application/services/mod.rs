pub mod harvester;
pub mod trash_dirs_scanner;
pub mod trash_dirs_selector;
pub mod trash_list_service;

#[cfg(test)]
pub(crate) mod fakes;

// Re-export for convenient access
pub use harvester::Harvester;
pub use trash_dirs_scanner::{ScanMode, TrashDirsScan, TrashDirsScanner};
pub use trash_dirs_selector::TrashDirsSelector;
pub use trash_list_service::TrashListService;
