//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    RequestContext, SettingsError, UserSettings, UserSettingsApi, UserSettingsUpdate,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is the in-process provider handed to the settings loader.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserSettingsApi for NativeClient {
    async fn get_user_settings(
        &self,
        ctx: &RequestContext,
    ) -> Result<Option<UserSettings>, SettingsError> {
        self.service.get_user_settings(ctx).await
    }

    async fn update_user_settings(
        &self,
        ctx: &RequestContext,
        update: UserSettingsUpdate,
    ) -> Result<UserSettings, SettingsError> {
        self.service.update_user_settings(ctx, update).await
    }
}
