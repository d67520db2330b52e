//! Repository trait for user settings records
//!
//! Implementations are in infra/storage.

use crate::contract::UserSettings;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for raw user settings records
#[async_trait]
pub trait UserSettingsRepository: Send + Sync {
    /// Find the record owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserSettings>>;

    /// Create or replace a user's record
    async fn upsert(&self, settings: &UserSettings) -> Result<UserSettings>;
}
