use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use brainbuzz_admin::client::ApiClient;
use brainbuzz_admin::config::Config;
use brainbuzz_admin::store::Stores;
use brainbuzz_admin::theme::{FileThemeStorage, ThemeStore};
use brainbuzz_admin::web::{AppState, WebServer};

// Helper function to send requests to the app
async fn send_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder().method(method).uri(uri);

    let request = if let Some(body) = body {
        request_builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

// Build a full router against an upstream nothing listens on; tests
// that never reach the upstream work normally, tests that do get a
// transport failure.
async fn test_app(dir: &TempDir) -> Router {
    let mut config = Config::default();
    config.api.base_url = "http://127.0.0.1:59999".to_string();
    config.storage.theme_path = dir.path().join("theme.json");
    config.storage.preview_tmp_path = dir.path().join("previews");

    let client = ApiClient::new(&config.api).unwrap();
    let theme = ThemeStore::load(Arc::new(FileThemeStorage::new(
        config.storage.theme_path.clone(),
    )))
    .await
    .unwrap();

    WebServer::create_router(AppState {
        config,
        client,
        stores: Stores::new(),
        theme,
    })
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, response) = send_request(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["status"], "healthy");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, _) = send_request(&app, Method::GET, "/api/v1/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn off_menu_limit_is_rejected_before_any_upstream_call() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, response) =
        send_request(&app, Method::GET, "/api/v1/categories?limit=37", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert!(response["error"]
        .as_str()
        .unwrap()
        .contains("Limit must be one of"));
}

#[tokio::test]
async fn page_zero_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, response) =
        send_request(&app, Method::GET, "/api/v1/categories?page=0", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, response) = send_request(&app, Method::GET, "/api/v1/languages", None).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().is_some());
}

#[tokio::test]
async fn form_schema_endpoint_serves_field_lists() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, response) = send_request(&app, Method::GET, "/api/v1/forms/coupon", None).await;
    assert_eq!(status, StatusCode::OK);
    let fields = response["data"]["fields"].as_array().unwrap();
    let discount = fields
        .iter()
        .find(|f| f["name"] == "discountType")
        .unwrap();
    assert_eq!(discount["kind"], "select");
    assert_eq!(discount["options"].as_array().unwrap().len(), 2);
    assert_eq!(discount["options"][0]["value"], "PERCENTAGE");

    let (status, _) = send_request(&app, Method::GET, "/api/v1/forms/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn theme_roundtrip_through_the_api() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, response) = send_request(&app, Method::GET, "/api/v1/theme", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["color"], "default");

    let (status, response) = send_request(
        &app,
        Method::PUT,
        "/api/v1/theme",
        Some(json!({"color": "ocean"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["color"], "ocean");

    let (status, response) = send_request(&app, Method::GET, "/api/v1/theme", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["color"], "ocean");
    // The default CSS-variable config survives a color-only update
    assert!(response["data"]["config"]["light"]["--bg"].is_string());
}

#[tokio::test]
async fn theme_update_persists_to_storage_file() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    send_request(
        &app,
        Method::PUT,
        "/api/v1/theme",
        Some(json!({"color": "forest"})),
    )
    .await;

    let contents = std::fs::read_to_string(dir.path().join("theme.json")).unwrap();
    let persisted: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(persisted["theme_color"], "forest");
}
