//! HTTP tests for the settings page routes

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use settings_page::{Config, SettingsError, SettingsPageModule};
use std::sync::Arc;
use tower::ServiceExt as _;
use uuid::Uuid;

mod common;
use common::{print_test_header, record, MockProvider};

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, headers, json)
}

fn get_settings(user_id: Option<Uuid>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/settings");
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

fn put_settings(user_id: Uuid, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/settings")
        .header("x-user-id", user_id.to_string())
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_new_user_returns_default_page_data() {
    print_test_header(
        "test_get_new_user_returns_default_page_data",
        "GET /settings for a user without settings returns defaults",
    );

    let module = SettingsPageModule::new(Config::default()).unwrap();
    let (status, headers, json) = send(module.router(), get_settings(Some(Uuid::new_v4()))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "hasError": false,
            "userSettings": {
                "motivationalQuotesEnabled": false,
                "quotesDisplayModes": ["PRE_WORKOUT"]
            }
        })
    );
    assert_eq!(headers["x-data-dependencies"], "settings:userSettings");
}

#[tokio::test]
async fn test_get_anonymous_reports_error_in_body() {
    let module = SettingsPageModule::new(Config::default()).unwrap();
    let (status, _headers, json) = send(module.router(), get_settings(None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hasError"], json!(true));
    assert_eq!(json["errorMessage"], json!("User is not authenticated"));
    assert_eq!(json["userSettings"]["quotesDisplayModes"], json!(["PRE_WORKOUT"]));
}

#[tokio::test]
async fn test_get_malformed_stored_modes_are_defaulted() {
    let module = SettingsPageModule::new(Config::default()).unwrap();
    let stored = record(json!(1), json!(["PRE_WORKOUT", "BOGUS"]));
    let user_id = stored.user_id;
    module.repository().unwrap().seed(stored);

    let (status, _headers, json) = send(module.router(), get_settings(Some(user_id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hasError"], json!(false));
    assert_eq!(json["userSettings"]["motivationalQuotesEnabled"], json!(true));
    assert_eq!(json["userSettings"]["quotesDisplayModes"], json!(["PRE_WORKOUT"]));
    assert!(json.get("errorMessage").is_none());
}

#[tokio::test]
async fn test_put_then_get_round_trip() {
    print_test_header(
        "test_put_then_get_round_trip",
        "PUT /settings stores settings, invalidates the tag and GET shows them",
    );

    let module = SettingsPageModule::new(Config::default()).unwrap();
    let user_id = Uuid::new_v4();

    let (status, headers, json) = send(
        module.router(),
        put_settings(
            user_id,
            json!({
                "motivationalQuotesEnabled": true,
                "quotesDisplayModes": ["POST_WORKOUT", "DASHBOARD"]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["x-invalidate"], "settings:userSettings");
    assert_eq!(json["hasError"], json!(false));
    assert_eq!(
        json["userSettings"]["quotesDisplayModes"],
        json!(["POST_WORKOUT", "DASHBOARD"])
    );

    let (_status, _headers, json) = send(module.router(), get_settings(Some(user_id))).await;
    assert_eq!(json["userSettings"]["motivationalQuotesEnabled"], json!(true));
    assert_eq!(
        json["userSettings"]["quotesDisplayModes"],
        json!(["POST_WORKOUT", "DASHBOARD"])
    );
}

#[tokio::test]
async fn test_put_empty_modes_is_bad_request() {
    let module = SettingsPageModule::new(Config::default()).unwrap();
    let (status, _headers, json) = send(
        module.router(),
        put_settings(
            Uuid::new_v4(),
            json!({"motivationalQuotesEnabled": true, "quotesDisplayModes": []}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["title"], json!("Validation Error"));
    assert_eq!(json["status"], json!(400));
}

#[tokio::test]
async fn test_put_unknown_mode_is_rejected() {
    let module = SettingsPageModule::new(Config::default()).unwrap();
    let (status, _headers, _json) = send(
        module.router(),
        put_settings(
            Uuid::new_v4(),
            json!({"motivationalQuotesEnabled": true, "quotesDisplayModes": ["NOPE"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(module.repository().unwrap().count(), 0);
}

#[tokio::test]
async fn test_get_with_failing_provider_uses_fallback_message() {
    let provider = Arc::new(MockProvider::failing(SettingsError::Internal));
    let module = SettingsPageModule::with_provider(Config::default(), provider.clone()).unwrap();

    let (status, headers, json) = send(module.router(), get_settings(Some(Uuid::new_v4()))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hasError"], json!(true));
    assert_eq!(json["errorMessage"], json!("Failed to load settings"));
    assert_eq!(headers["x-data-dependencies"], "settings:userSettings");
    assert_eq!(provider.get_calls(), 1);
    assert!(module.repository().is_none());
}

#[tokio::test]
async fn test_put_forwards_update_to_provider() {
    let provider = Arc::new(MockProvider::absent());
    let module = SettingsPageModule::with_provider(Config::default(), provider.clone()).unwrap();

    let (status, _headers, _json) = send(
        module.router(),
        put_settings(
            Uuid::new_v4(),
            json!({"motivationalQuotesEnabled": false, "quotesDisplayModes": ["REST_TIMER"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updates = provider.updates();
    assert_eq!(updates.len(), 1);
    assert!(!updates[0].motivational_quotes_enabled);
    assert_eq!(updates[0].quotes_display_modes.len(), 1);
}
