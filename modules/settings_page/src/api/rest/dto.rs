//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quotes display mode on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotesDisplayModeDto {
    PreWorkout,
    PostWorkout,
    RestTimer,
    Dashboard,
}

/// Normalized user settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsDto {
    /// Whether motivational quotes are shown
    pub motivational_quotes_enabled: bool,

    /// Where quotes are shown; never empty
    #[schema(example = json!(["PRE_WORKOUT"]))]
    pub quotes_display_modes: Vec<QuotesDisplayModeDto>,
}

/// Settings page data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPageDto {
    /// True when the settings could not be loaded
    pub has_error: bool,

    /// Settings to render; defaults when `hasError` is true
    pub user_settings: UserSettingsDto,

    /// Human-readable failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Settings update request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSettingsRequest {
    /// Whether motivational quotes are shown
    #[serde(default)]
    pub motivational_quotes_enabled: bool,

    /// Where quotes are shown; must not be empty
    pub quotes_display_modes: Vec<QuotesDisplayModeDto>,
}

// Note: Conversion implementations live in mapper.rs
