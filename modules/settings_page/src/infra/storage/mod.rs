//! Storage layer

pub mod memory;

pub use memory::InMemoryUserSettingsRepository;
