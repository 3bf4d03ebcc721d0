//! Health endpoint

use axum::response::Response;
use serde_json::json;

use crate::web::responses::ok;

pub async fn health() -> Response {
    ok(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
