//! Request context construction from inbound HTTP requests

use crate::contract::RequestContext;
use axum::http::HeaderMap;
use uuid::Uuid;

/// Builds the request-scoped context for an inbound request
pub trait ContextFactory: Send + Sync {
    fn create_context(&self, headers: &HeaderMap) -> RequestContext;
}

/// Reads the caller's user id from a request header.
///
/// A missing or malformed header yields an anonymous context; rejecting
/// anonymous callers is up to the provider.
#[derive(Debug, Clone)]
pub struct HeaderContextFactory {
    user_id_header: String,
}

impl HeaderContextFactory {
    pub fn new(user_id_header: impl Into<String>) -> Self {
        Self {
            user_id_header: user_id_header.into(),
        }
    }
}

impl ContextFactory for HeaderContextFactory {
    fn create_context(&self, headers: &HeaderMap) -> RequestContext {
        let user_id = headers
            .get(self.user_id_header.as_str())
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok());

        if user_id.is_none() && headers.contains_key(self.user_id_header.as_str()) {
            tracing::debug!(header = %self.user_id_header, "Ignoring malformed user id header");
        }

        RequestContext::new(user_id)
    }
}
