//! Test-series handlers, including the nested test/section/question
//! routes
//!
//! Nested mutations go straight to the upstream API; afterwards the
//! parent series is re-fetched and spliced into the store so the
//! cached tree stays consistent with what the backend now holds.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use crate::errors::AppResult;
use crate::models::{
    TestCreateRequest, TestQuestionCreateRequest, TestQuestionUpdateRequest,
    TestSectionCreateRequest, TestSeriesCreateRequest, TestSeriesUpdateRequest, TestUpdateRequest,
};
use crate::web::extractors::TableQueryParams;
use crate::web::responses::{created, no_content, ok};
use crate::web::AppState;

use super::client_mode_response;

pub async fn list_test_series(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .test_series
        .refresh_all(state.client.list_test_series())
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn get_test_series(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    let series = state.client.get_test_series(&id).await?;
    Ok(ok(series))
}

pub async fn create_test_series(
    State(state): State<AppState>,
    Json(payload): Json<TestSeriesCreateRequest>,
) -> AppResult<Response> {
    let series = state.client.create_test_series(&payload).await?;
    state.stores.test_series.upsert(series.clone()).await;
    Ok(created(series))
}

pub async fn update_test_series(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<TestSeriesUpdateRequest>,
) -> AppResult<Response> {
    let series = state.client.update_test_series(&id, &payload).await?;
    state.stores.test_series.upsert(series.clone()).await;
    Ok(ok(series))
}

pub async fn delete_test_series(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_test_series(&id).await?;
    state.stores.test_series.remove(&id).await;
    Ok(no_content())
}

/// Re-fetch a series after a nested mutation so the cached tree
/// reflects the change
async fn resync_series(state: &AppState, series_id: &str) -> AppResult<()> {
    let series = state.client.get_test_series(series_id).await?;
    state.stores.test_series.upsert(series).await;
    Ok(())
}

pub async fn add_test(
    Path(series_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<TestCreateRequest>,
) -> AppResult<Response> {
    let test = state.client.add_test(&series_id, &payload).await?;
    resync_series(&state, &series_id).await?;
    Ok(created(test))
}

pub async fn update_test(
    Path((series_id, test_id)): Path<(String, String)>,
    State(state): State<AppState>,
    Json(payload): Json<TestUpdateRequest>,
) -> AppResult<Response> {
    let test = state
        .client
        .update_test(&series_id, &test_id, &payload)
        .await?;
    resync_series(&state, &series_id).await?;
    Ok(ok(test))
}

pub async fn delete_test(
    Path((series_id, test_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_test(&series_id, &test_id).await?;
    resync_series(&state, &series_id).await?;
    Ok(no_content())
}

pub async fn add_section(
    Path((series_id, test_id)): Path<(String, String)>,
    State(state): State<AppState>,
    Json(payload): Json<TestSectionCreateRequest>,
) -> AppResult<Response> {
    let section = state
        .client
        .add_section(&series_id, &test_id, &payload)
        .await?;
    resync_series(&state, &series_id).await?;
    Ok(created(section))
}

pub async fn update_section(
    Path((series_id, test_id, section_id)): Path<(String, String, String)>,
    State(state): State<AppState>,
    Json(payload): Json<TestSectionCreateRequest>,
) -> AppResult<Response> {
    let section = state
        .client
        .update_section(&series_id, &test_id, &section_id, &payload)
        .await?;
    resync_series(&state, &series_id).await?;
    Ok(ok(section))
}

pub async fn delete_section(
    Path((series_id, test_id, section_id)): Path<(String, String, String)>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state
        .client
        .delete_section(&series_id, &test_id, &section_id)
        .await?;
    resync_series(&state, &series_id).await?;
    Ok(no_content())
}

pub async fn add_question(
    Path((series_id, test_id, section_id)): Path<(String, String, String)>,
    State(state): State<AppState>,
    Json(payload): Json<TestQuestionCreateRequest>,
) -> AppResult<Response> {
    let question = state
        .client
        .add_question(&series_id, &test_id, &section_id, &payload)
        .await?;
    resync_series(&state, &series_id).await?;
    Ok(created(question))
}

pub async fn update_question(
    Path((series_id, test_id, section_id, question_id)): Path<(String, String, String, String)>,
    State(state): State<AppState>,
    Json(payload): Json<TestQuestionUpdateRequest>,
) -> AppResult<Response> {
    let question = state
        .client
        .update_question(&series_id, &test_id, &section_id, &question_id, &payload)
        .await?;
    resync_series(&state, &series_id).await?;
    Ok(ok(question))
}

pub async fn delete_question(
    Path((series_id, test_id, section_id, question_id)): Path<(String, String, String, String)>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state
        .client
        .delete_question(&series_id, &test_id, &section_id, &question_id)
        .await?;
    resync_series(&state, &series_id).await?;
    Ok(no_content())
}
