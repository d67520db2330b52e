//! Common test utilities: scripted settings providers and record builders

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use settings_page::{
    RequestContext, SettingsError, UserSettings, UserSettingsApi, UserSettingsUpdate,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Provider returning a scripted result and counting calls
pub struct MockProvider {
    result: Mutex<Result<Option<UserSettings>, SettingsError>>,
    get_calls: AtomicUsize,
    updates: Mutex<Vec<UserSettingsUpdate>>,
}

impl MockProvider {
    pub fn returning(result: Result<Option<UserSettings>, SettingsError>) -> Self {
        Self {
            result: Mutex::new(result),
            get_calls: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn absent() -> Self {
        Self::returning(Ok(None))
    }

    pub fn record(record: UserSettings) -> Self {
        Self::returning(Ok(Some(record)))
    }

    pub fn failing(error: SettingsError) -> Self {
        Self::returning(Err(error))
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> Vec<UserSettingsUpdate> {
        self.updates.lock().clone()
    }
}

#[async_trait]
impl UserSettingsApi for MockProvider {
    async fn get_user_settings(
        &self,
        _ctx: &RequestContext,
    ) -> Result<Option<UserSettings>, SettingsError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.result.lock().clone()
    }

    async fn update_user_settings(
        &self,
        ctx: &RequestContext,
        update: UserSettingsUpdate,
    ) -> Result<UserSettings, SettingsError> {
        self.updates.lock().push(update.clone());
        Ok(UserSettings {
            user_id: ctx.user_id().unwrap_or_default(),
            motivational_quotes_enabled: serde_json::json!(update.motivational_quotes_enabled),
            quotes_display_modes: serde_json::json!(update
                .quotes_display_modes
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()),
            updated_at: chrono::Utc::now(),
        })
    }
}

/// Raw record with the given stored values
pub fn record(
    motivational_quotes_enabled: serde_json::Value,
    quotes_display_modes: serde_json::Value,
) -> UserSettings {
    UserSettings {
        user_id: Uuid::new_v4(),
        motivational_quotes_enabled,
        quotes_display_modes,
        updated_at: chrono::Utc::now(),
    }
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}
