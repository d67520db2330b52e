//! Provider trait consumed by the settings loader
//!
//! NO HTTP - direct function calls. The in-process implementation lives in
//! `api::native`; other transports implement the same trait.

use super::{
    context::RequestContext,
    error::SettingsError,
    model::{UserSettings, UserSettingsUpdate},
};
use async_trait::async_trait;

/// User settings API used by the settings page
#[async_trait]
pub trait UserSettingsApi: Send + Sync {
    /// Get the current user's raw settings record; `None` if the user has none yet
    async fn get_user_settings(
        &self,
        ctx: &RequestContext,
    ) -> Result<Option<UserSettings>, SettingsError>;

    /// Replace the current user's settings
    async fn update_user_settings(
        &self,
        ctx: &RequestContext,
        update: UserSettingsUpdate,
    ) -> Result<UserSettings, SettingsError>;
}
