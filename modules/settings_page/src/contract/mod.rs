//! Contract layer - public API between the settings loader and its provider
//!
//! This layer contains transport-agnostic models and the provider trait.

pub mod client;
pub mod context;
pub mod error;
pub mod model;

pub use client::UserSettingsApi;
pub use context::{DependencyRegistrar, RequestContext};
pub use error::SettingsError;
pub use model::{
    QuotesDisplayMode, QuotesDisplayModes, SettingsViewModel, UserSettings, UserSettingsUpdate,
    UserSettingsView,
};
