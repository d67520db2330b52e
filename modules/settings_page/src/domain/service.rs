//! Domain service - user settings retrieval and updates

use super::repository::UserSettingsRepository;
use crate::contract::{RequestContext, SettingsError, UserSettings, UserSettingsUpdate};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service backing the user settings API
pub struct Service {
    repo: Arc<dyn UserSettingsRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn UserSettingsRepository>) -> Self {
        Self { repo }
    }

    /// Get the current user's raw settings record
    pub async fn get_user_settings(
        &self,
        ctx: &RequestContext,
    ) -> Result<Option<UserSettings>, SettingsError> {
        let user_id = Self::require_user(ctx)?;

        self.repo.find_by_user(user_id).await.map_err(|e| {
            tracing::error!(error = ?e, %user_id, "Failed to read user settings");
            SettingsError::Storage {
                message: e.to_string(),
            }
        })
    }

    /// Replace the current user's settings
    pub async fn update_user_settings(
        &self,
        ctx: &RequestContext,
        update: UserSettingsUpdate,
    ) -> Result<UserSettings, SettingsError> {
        let user_id = Self::require_user(ctx)?;

        if update.quotes_display_modes.is_empty() {
            return Err(SettingsError::Validation {
                message: "quotesDisplayModes must contain at least one mode".to_string(),
            });
        }

        let modes: Vec<&str> = update
            .quotes_display_modes
            .iter()
            .map(|m| m.as_str())
            .collect();

        let settings = UserSettings {
            user_id,
            motivational_quotes_enabled: serde_json::Value::Bool(
                update.motivational_quotes_enabled,
            ),
            quotes_display_modes: serde_json::json!(modes),
            updated_at: chrono::Utc::now(),
        };

        let saved = self.repo.upsert(&settings).await.map_err(|e| {
            tracing::error!(error = ?e, %user_id, "Failed to store user settings");
            SettingsError::Storage {
                message: e.to_string(),
            }
        })?;

        tracing::debug!(%user_id, request_id = %ctx.request_id(), "User settings updated");
        Ok(saved)
    }

    fn require_user(ctx: &RequestContext) -> Result<Uuid, SettingsError> {
        ctx.user_id().ok_or_else(|| SettingsError::Unauthorized {
            message: "User is not authenticated".to_string(),
        })
    }
}
