//! In-memory repository implementation

use crate::contract::UserSettings;
use crate::domain::repository::UserSettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// User settings keyed by user id
#[derive(Clone, Default)]
pub struct InMemoryUserSettingsRepository {
    data: Arc<RwLock<HashMap<Uuid, UserSettings>>>,
}

impl InMemoryUserSettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record as-is, without validation
    pub fn seed(&self, settings: UserSettings) {
        self.data.write().insert(settings.user_id, settings);
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }
}

#[async_trait]
impl UserSettingsRepository for InMemoryUserSettingsRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserSettings>> {
        Ok(self.data.read().get(&user_id).cloned())
    }

    async fn upsert(&self, settings: &UserSettings) -> Result<UserSettings> {
        self.data
            .write()
            .insert(settings.user_id, settings.clone());
        Ok(settings.clone())
    }
}
