//! Catalog taxonomy handlers: categories, subcategories, languages
//! and validities
//!
//! These collections are small, so the upstream endpoints return them
//! whole and every listing here runs the table engine in client mode.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use serde::Deserialize;

use crate::errors::AppResult;
use crate::models::{
    CategoryCreateRequest, LanguageCreateRequest, SubCategoryCreateRequest, ValidityCreateRequest,
};
use crate::web::extractors::TableQueryParams;
use crate::web::responses::{created, no_content, ok};
use crate::web::AppState;

use super::client_mode_response;

pub async fn list_categories(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .categories
        .refresh_all(state.client.list_categories())
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryCreateRequest>,
) -> AppResult<Response> {
    let category = state.client.create_category(&payload).await?;
    state.stores.categories.upsert(category.clone()).await;
    Ok(created(category))
}

pub async fn update_category(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CategoryCreateRequest>,
) -> AppResult<Response> {
    let category = state.client.update_category(&id, &payload).await?;
    state.stores.categories.upsert(category.clone()).await;
    Ok(ok(category))
}

pub async fn delete_category(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_category(&id).await?;
    state.stores.categories.remove(&id).await;
    Ok(no_content())
}

#[derive(Debug, Deserialize)]
pub struct SubCategoryFilter {
    pub category: Option<String>,
}

pub async fn list_sub_categories(
    State(state): State<AppState>,
    Query(filter): Query<SubCategoryFilter>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .sub_categories
        .refresh_all(state.client.list_sub_categories(filter.category.as_deref()))
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn create_sub_category(
    State(state): State<AppState>,
    Json(payload): Json<SubCategoryCreateRequest>,
) -> AppResult<Response> {
    let sub_category = state.client.create_sub_category(&payload).await?;
    state.stores.sub_categories.upsert(sub_category.clone()).await;
    Ok(created(sub_category))
}

pub async fn update_sub_category(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<SubCategoryCreateRequest>,
) -> AppResult<Response> {
    let sub_category = state.client.update_sub_category(&id, &payload).await?;
    state.stores.sub_categories.upsert(sub_category.clone()).await;
    Ok(ok(sub_category))
}

pub async fn delete_sub_category(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_sub_category(&id).await?;
    state.stores.sub_categories.remove(&id).await;
    Ok(no_content())
}

pub async fn list_languages(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .languages
        .refresh_all(state.client.list_languages())
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn create_language(
    State(state): State<AppState>,
    Json(payload): Json<LanguageCreateRequest>,
) -> AppResult<Response> {
    let language = state.client.create_language(&payload).await?;
    state.stores.languages.upsert(language.clone()).await;
    Ok(created(language))
}

pub async fn update_language(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<LanguageCreateRequest>,
) -> AppResult<Response> {
    let language = state.client.update_language(&id, &payload).await?;
    state.stores.languages.upsert(language.clone()).await;
    Ok(ok(language))
}

pub async fn delete_language(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_language(&id).await?;
    state.stores.languages.remove(&id).await;
    Ok(no_content())
}

pub async fn list_validities(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .validities
        .refresh_all(state.client.list_validities())
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn create_validity(
    State(state): State<AppState>,
    Json(payload): Json<ValidityCreateRequest>,
) -> AppResult<Response> {
    let validity = state.client.create_validity(&payload).await?;
    state.stores.validities.upsert(validity.clone()).await;
    Ok(created(validity))
}

pub async fn update_validity(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<ValidityCreateRequest>,
) -> AppResult<Response> {
    let validity = state.client.update_validity(&id, &payload).await?;
    state.stores.validities.upsert(validity.clone()).await;
    Ok(ok(validity))
}

pub async fn delete_validity(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_validity(&id).await?;
    state.stores.validities.remove(&id).await;
    Ok(no_content())
}
