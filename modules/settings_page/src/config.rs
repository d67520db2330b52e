//! Configuration for the settings page module

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings page configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tag registered on every load so the page can be refreshed after updates
    #[serde(default = "default_dependency_tag")]
    pub dependency_tag: String,

    /// Error message used when a provider fault carries no text
    #[serde(default = "default_fallback_error_message")]
    pub fallback_error_message: String,

    /// Request header carrying the authenticated user id
    #[serde(default = "default_user_id_header")]
    pub user_id_header: String,

    /// Log a warning when a stored display modes value fails validation
    #[serde(default = "default_true")]
    pub log_malformed_modes: bool,

    /// HTTP listen address for the settings server
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dependency_tag: default_dependency_tag(),
            fallback_error_message: default_fallback_error_message(),
            user_id_header: default_user_id_header(),
            log_malformed_modes: true,
            bind_addr: default_bind_addr(),
        }
    }
}

impl Config {
    /// Layered config: defaults -> YAML (if provided) -> env (`APP__*`)
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("APP__").split("__"))
            .extract()
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

fn default_dependency_tag() -> String {
    "settings:userSettings".to_string()
}

fn default_fallback_error_message() -> String {
    "Failed to load settings".to_string()
}

fn default_user_id_header() -> String {
    "x-user-id".to_string()
}

fn default_true() -> bool {
    true
}

fn default_bind_addr() -> String {
    "127.0.0.1:8087".to_string()
}
