//! Contract models for the settings page
//!
//! These models are transport-agnostic and shared between the loader and its provider.
//! NO serde derives - REST DTOs live in `api::rest::dto`.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Raw user settings record as stored by the provider.
///
/// Field values are kept as JSON because stored data may be malformed; the loader
/// is responsible for validating and defaulting them.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    /// Owner of the record
    pub user_id: Uuid,
    /// Any JSON value; `Null` when absent
    pub motivational_quotes_enabled: serde_json::Value,
    /// Expected to be an array of display mode names; `Null` when absent
    pub quotes_display_modes: serde_json::Value,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Where motivational quotes are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuotesDisplayMode {
    #[default]
    PreWorkout,
    PostWorkout,
    RestTimer,
    Dashboard,
}

impl QuotesDisplayMode {
    /// Canonical enumeration order
    pub const ALL: [QuotesDisplayMode; 4] = [
        QuotesDisplayMode::PreWorkout,
        QuotesDisplayMode::PostWorkout,
        QuotesDisplayMode::RestTimer,
        QuotesDisplayMode::Dashboard,
    ];

    /// Wire name of the member
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreWorkout => "PRE_WORKOUT",
            Self::PostWorkout => "POST_WORKOUT",
            Self::RestTimer => "REST_TIMER",
            Self::Dashboard => "DASHBOARD",
        }
    }
}

impl fmt::Display for QuotesDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuotesDisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown quotes display mode '{}'", s))
    }
}

/// Non-empty ordered sequence of display modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotesDisplayModes(Vec<QuotesDisplayMode>);

impl QuotesDisplayModes {
    /// Wrap a sequence; `None` if it is empty
    pub fn new(modes: Vec<QuotesDisplayMode>) -> Option<Self> {
        if modes.is_empty() {
            None
        } else {
            Some(Self(modes))
        }
    }

    pub fn as_slice(&self) -> &[QuotesDisplayMode] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<QuotesDisplayMode> {
        self.0
    }
}

impl Default for QuotesDisplayModes {
    fn default() -> Self {
        Self(vec![QuotesDisplayMode::default()])
    }
}

/// Normalized user settings handed to the page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserSettingsView {
    pub motivational_quotes_enabled: bool,
    pub quotes_display_modes: QuotesDisplayModes,
}

/// Page data produced by the settings loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsViewModel {
    /// True iff retrieval failed
    pub has_error: bool,
    /// Always fully populated, defaults on failure
    pub user_settings: UserSettingsView,
    /// Present only when `has_error` is true
    pub error_message: Option<String>,
}

impl SettingsViewModel {
    /// Successful load
    pub fn loaded(user_settings: UserSettingsView) -> Self {
        Self {
            has_error: false,
            user_settings,
            error_message: None,
        }
    }

    /// Failed load: default settings plus an error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            has_error: true,
            user_settings: UserSettingsView::default(),
            error_message: Some(message.into()),
        }
    }
}

/// Full replacement of a user's settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettingsUpdate {
    pub motivational_quotes_enabled: bool,
    pub quotes_display_modes: Vec<QuotesDisplayMode>,
}
