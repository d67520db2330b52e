//! Settings page loader
//!
//! Produces the page data for the settings route. Retrieval and validation are
//! fallible internally, but `load` always returns a complete view-model: absent
//! records and malformed stored values fall back to defaults, and provider faults
//! are logged and reported through `has_error` / `error_message`.

use super::validation::{coerce_bool, QuotesDisplayModesSchema};
use crate::config::Config;
use crate::contract::{
    DependencyRegistrar, QuotesDisplayModes, RequestContext, SettingsError, SettingsViewModel,
    UserSettings, UserSettingsApi, UserSettingsView,
};
use std::sync::Arc;

pub struct SettingsLoader {
    provider: Arc<dyn UserSettingsApi>,
    schema: QuotesDisplayModesSchema,
    dependency_tag: String,
    fallback_error_message: String,
    log_malformed_modes: bool,
}

impl SettingsLoader {
    pub fn new(provider: Arc<dyn UserSettingsApi>, config: &Config) -> Result<Self, SettingsError> {
        Ok(Self {
            provider,
            schema: QuotesDisplayModesSchema::new()?,
            dependency_tag: config.dependency_tag.clone(),
            fallback_error_message: config.fallback_error_message.clone(),
            log_malformed_modes: config.log_malformed_modes,
        })
    }

    /// Tag registered on every load
    pub fn dependency_tag(&self) -> &str {
        &self.dependency_tag
    }

    /// Load the settings page data for the caller in `ctx`
    pub async fn load(&self, ctx: &RequestContext) -> SettingsViewModel {
        ctx.register_dependency(&self.dependency_tag);

        match self.fetch(ctx).await {
            Ok(view) => SettingsViewModel::loaded(view),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    user_id = ?ctx.user_id(),
                    request_id = %ctx.request_id(),
                    "Failed to load settings"
                );
                let message = e
                    .message()
                    .unwrap_or_else(|| self.fallback_error_message.clone());
                SettingsViewModel::failed(message)
            }
        }
    }

    async fn fetch(&self, ctx: &RequestContext) -> Result<UserSettingsView, SettingsError> {
        let Some(record) = self.provider.get_user_settings(ctx).await? else {
            return Ok(UserSettingsView::default());
        };

        Ok(self.normalize(&record))
    }

    fn normalize(&self, record: &UserSettings) -> UserSettingsView {
        let quotes_display_modes = match self.schema.validate(&record.quotes_display_modes) {
            Ok(modes) => modes,
            Err(e) => {
                if self.log_malformed_modes {
                    tracing::warn!(
                        error = %e,
                        user_id = %record.user_id,
                        "Stored quotes display modes are invalid, using default"
                    );
                }
                QuotesDisplayModes::default()
            }
        };

        UserSettingsView {
            motivational_quotes_enabled: coerce_bool(&record.motivational_quotes_enabled),
            quotes_display_modes,
        }
    }
}
