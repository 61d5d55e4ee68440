pub mod trash_directory;
pub mod trash_info;
