pub mod fs_reader_repository;
pub mod proc_mounts_provider;

pub use fs_reader_repository::FsReaderRepository;
pub use proc_mounts_provider::ProcMountsProvider;
