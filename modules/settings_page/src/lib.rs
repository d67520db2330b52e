//! Settings Page Module
//!
//! Server-side page data for the user settings route. Loads the caller's
//! display settings through a provider, validates the quotes display modes
//! against their schema and always returns a complete view-model.

// Public exports
pub mod contract;
pub use contract::{
    client::UserSettingsApi, error::SettingsError, DependencyRegistrar, QuotesDisplayMode,
    QuotesDisplayModes, RequestContext, SettingsViewModel, UserSettings, UserSettingsUpdate,
    UserSettingsView,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::SettingsPageModule;

pub mod domain;
pub use domain::SettingsLoader;

pub mod api;
pub mod infra;
