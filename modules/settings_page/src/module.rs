//! Module wiring: storage, service, provider, loader and routes

use crate::api::native::NativeClient;
use crate::api::rest::{
    context::{ContextFactory, HeaderContextFactory},
    handlers::SettingsPageState,
    routes::register_routes,
};
use crate::config::Config;
use crate::contract::UserSettingsApi;
use crate::domain::{Service, SettingsLoader};
use crate::infra::storage::InMemoryUserSettingsRepository;
use anyhow::Result;
use std::sync::Arc;

/// Settings page module
pub struct SettingsPageModule {
    config: Config,
    repository: Option<InMemoryUserSettingsRepository>,
    client: Arc<dyn UserSettingsApi>,
    loader: Arc<SettingsLoader>,
}

impl SettingsPageModule {
    /// Wire the module against the built-in in-memory store
    pub fn new(config: Config) -> Result<Self> {
        let repository = InMemoryUserSettingsRepository::new();
        let service = Arc::new(Service::new(Arc::new(repository.clone())));
        let client: Arc<dyn UserSettingsApi> = Arc::new(NativeClient::new(service));

        let mut module = Self::with_provider(config, client)?;
        module.repository = Some(repository);
        Ok(module)
    }

    /// Wire the module against an external settings provider
    pub fn with_provider(config: Config, client: Arc<dyn UserSettingsApi>) -> Result<Self> {
        let loader = Arc::new(SettingsLoader::new(client.clone(), &config)?);

        tracing::info!(
            dependency_tag = %config.dependency_tag,
            "Settings page module initialized"
        );

        Ok(Self {
            config,
            repository: None,
            client,
            loader,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn loader(&self) -> Arc<SettingsLoader> {
        self.loader.clone()
    }

    pub fn client(&self) -> Arc<dyn UserSettingsApi> {
        self.client.clone()
    }

    /// Built-in store, when the module owns one
    pub fn repository(&self) -> Option<&InMemoryUserSettingsRepository> {
        self.repository.as_ref()
    }

    /// HTTP routes serving the settings page data
    pub fn router(&self) -> axum::Router {
        let contexts: Arc<dyn ContextFactory> =
            Arc::new(HeaderContextFactory::new(self.config.user_id_header.clone()));
        let state = Arc::new(SettingsPageState {
            loader: self.loader.clone(),
            client: self.client.clone(),
            contexts,
        });

        tracing::info!("Registering settings page REST routes");
        register_routes(axum::Router::new(), state)
    }
}
