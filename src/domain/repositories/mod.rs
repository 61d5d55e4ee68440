pub mod file_system_reader;
pub mod mount_point_provider;

// Re-export the ports for convenience
pub use file_system_reader::FileSystemReader;
pub use mount_point_provider::MountPointProvider;
