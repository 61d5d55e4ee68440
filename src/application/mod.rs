pub mod dtos;
pub mod ports;
pub mod services;

// Re-export the inbound port for convenience
pub use ports::trash_ports::TrashListUseCase;
