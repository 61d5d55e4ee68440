use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// OxiTrash - XDG trash listing tool
///
/// Lists the contents of the freedesktop.org trash cans visible to the
/// current user: the home trash plus the per-volume trash directories of
/// every mounted physical volume.
///
/// The architecture follows the Clean/Hexagonal Architecture pattern with:
///
/// - Domain Layer: Trash entities and filesystem port definitions (domain/*)
/// - Application Layer: Scanning, harvesting and listing services (application/*)
/// - Infrastructure Layer: Real filesystem and /proc/mounts adapters (infrastructure/*)
/// - Interface Layer: The command-line front end (interfaces/*)
///
/// Dependencies are managed through dependency inversion, with high-level modules
/// defining interfaces (ports) that low-level modules implement (adapters).

/// Common utilities, configuration, and error handling
mod common;
/// Core domain model, entities, and port definitions
mod domain;
/// Application services, use cases, and DTOs
mod application;
/// Technical implementations of the filesystem and mount ports
mod infrastructure;
/// Command-line front end
mod interfaces;

use application::services::harvester::Harvester;
use application::services::trash_dirs_selector::TrashDirsSelector;
use application::services::trash_list_service::TrashListService;
use common::config::AppConfig;
use domain::repositories::file_system_reader::FileSystemReader;
use domain::repositories::mount_point_provider::MountPointProvider;
use infrastructure::repositories::fs_reader_repository::FsReaderRepository;
use infrastructure::repositories::proc_mounts_provider::ProcMountsProvider;
use interfaces::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let fs: Arc<dyn FileSystemReader> = Arc::new(FsReaderRepository::new());
    let mounts: Arc<dyn MountPointProvider> = Arc::new(ProcMountsProvider::new());
    let selector = TrashDirsSelector::with_readers(fs.clone(), mounts);
    let harvester = Harvester::new(fs.clone());
    let service = TrashListService::new(selector, harvester, fs, config);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    cli.run(&service, &mut stdout, &mut stderr)?;
    Ok(())
}
