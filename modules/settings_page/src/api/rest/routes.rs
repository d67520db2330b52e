//! Route registration

use super::{dto::*, error::Problem, handlers, handlers::SettingsPageState};
use axum::{
    http::HeaderMap,
    response::Response,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register the settings page routes
pub fn register_routes(router: Router, state: Arc<SettingsPageState>) -> Router {
    router
        .route(
            "/settings",
            get(get_settings_page_handler).put(update_settings_handler),
        )
        .layer(Extension(state))
}

// ===== Handler wrappers that extract state from Extension =====

async fn get_settings_page_handler(
    Extension(state): Extension<Arc<SettingsPageState>>,
    headers: HeaderMap,
) -> Response {
    handlers::get_settings_page(state, headers).await
}

async fn update_settings_handler(
    Extension(state): Extension<Arc<SettingsPageState>>,
    headers: HeaderMap,
    json: Json<UpdateUserSettingsRequest>,
) -> Result<Response, Problem> {
    handlers::update_settings(state, headers, json).await
}
