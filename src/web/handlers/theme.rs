//! Theme handlers

use axum::{extract::State, response::Response, Json};
use serde::Deserialize;

use crate::errors::AppResult;
use crate::theme::ThemeConfig;
use crate::web::responses::ok;
use crate::web::AppState;

pub async fn get_theme(State(state): State<AppState>) -> AppResult<Response> {
    Ok(ok(state.theme.applied().await))
}

#[derive(Debug, Deserialize)]
pub struct ThemeUpdateRequest {
    pub color: String,
    /// When omitted, the currently applied CSS-variable config is kept
    #[serde(default)]
    pub config: Option<ThemeConfig>,
}

pub async fn put_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeUpdateRequest>,
) -> AppResult<Response> {
    let config = match payload.config {
        Some(config) => config,
        None => state.theme.applied().await.config,
    };
    let applied = state.theme.apply(payload.color, config).await?;
    Ok(ok(applied))
}
