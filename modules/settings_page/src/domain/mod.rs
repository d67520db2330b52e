//! Domain layer - loader, validation and the settings service

pub mod loader;
pub mod repository;
pub mod service;
pub mod validation;

pub use loader::SettingsLoader;
pub use repository::UserSettingsRepository;
pub use service::Service;
pub use validation::{coerce_bool, QuotesDisplayModesSchema};
