//! HTTP request handlers - thin layer over the settings loader

use super::{
    context::ContextFactory,
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{RequestContext, UserSettingsApi};
use crate::domain::SettingsLoader;
use axum::{
    http::{HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Tags the response data depends on
pub const DATA_DEPENDENCIES_HEADER: HeaderName = HeaderName::from_static("x-data-dependencies");

/// Tags invalidated by a write
pub const INVALIDATE_HEADER: HeaderName = HeaderName::from_static("x-invalidate");

/// Shared state for the settings page routes
pub struct SettingsPageState {
    pub loader: Arc<SettingsLoader>,
    pub client: Arc<dyn UserSettingsApi>,
    pub contexts: Arc<dyn ContextFactory>,
}

/// Load the settings page data; always 200, failures are reported in the body
pub async fn get_settings_page(state: Arc<SettingsPageState>, headers: HeaderMap) -> Response {
    let ctx = state.contexts.create_context(&headers);
    let page: SettingsPageDto = state.loader.load(&ctx).await.into();

    let mut response = Json(page).into_response();
    insert_dependencies(&mut response, &ctx);
    response
}

/// Replace the user's settings and return the refreshed page data
pub async fn update_settings(
    state: Arc<SettingsPageState>,
    headers: HeaderMap,
    Json(req): Json<UpdateUserSettingsRequest>,
) -> Result<Response, Problem> {
    let ctx = state.contexts.create_context(&headers);
    state
        .client
        .update_user_settings(&ctx, req.into())
        .await
        .map_err(map_domain_error)?;

    let page: SettingsPageDto = state.loader.load(&ctx).await.into();

    let mut response = Json(page).into_response();
    insert_dependencies(&mut response, &ctx);
    if let Ok(value) = HeaderValue::from_str(state.loader.dependency_tag()) {
        response.headers_mut().insert(INVALIDATE_HEADER, value);
    }
    Ok(response)
}

fn insert_dependencies(response: &mut Response, ctx: &RequestContext) {
    let mut seen = HashSet::new();
    let mut tags = ctx.dependencies();
    tags.retain(|tag| seen.insert(tag.clone()));
    if tags.is_empty() {
        return;
    }

    match HeaderValue::from_str(&tags.join(", ")) {
        Ok(value) => {
            response.headers_mut().insert(DATA_DEPENDENCIES_HEADER, value);
        }
        Err(e) => {
            tracing::warn!(error = %e, ?tags, "Dependency tags are not a valid header value");
        }
    }
}
