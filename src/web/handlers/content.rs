//! Content handlers: courses, e-books, live classes, current affairs
//! and daily quizzes
//!
//! The upload-bearing entities accept multipart bodies. Each request
//! body is collected into a schema-validated form draft; the draft
//! picks the upstream encoding itself, so a submission without files
//! goes up as plain JSON even though it arrived as multipart.

use axum::{
    extract::{Multipart, Path, Query, State},
    response::Response,
    Json,
};
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::forms::{schemas, PayloadEncoding};
use crate::models::{Course, CurrentAffairs, DailyQuizCreateRequest, EBook, LiveClass};
use crate::web::extractors::TableQueryParams;
use crate::web::responses::{created, no_content, ok};
use crate::web::AppState;

use super::{client_mode_response, draft_from_multipart};

#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    /// When set, classification references come back populated
    #[serde(default)]
    pub full: bool,
}

pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = if query.full {
        state
            .stores
            .courses
            .refresh_all(state.client.list_courses_full())
            .await?
    } else {
        state
            .stores
            .courses
            .refresh_all(state.client.list_courses())
            .await?
    };
    client_mode_response(&snapshot.items, &params)
}

pub async fn get_course_all_in_one(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    let payload = state.client.get_course_all_in_one(&id).await?;
    Ok(ok(payload))
}

pub async fn create_course(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let schema = schemas::course();
    let draft =
        draft_from_multipart(&schema, multipart, &state.config.storage.preview_tmp_path).await?;
    let course: Course = match draft.encoding() {
        PayloadEncoding::Multipart => {
            let form = draft.into_multipart().map_err(AppError::Web)?;
            state.client.create_course_form(form).await?
        }
        PayloadEncoding::Json => state.client.create_course(&draft.to_json()).await?,
    };
    state.stores.courses.upsert(course.clone()).await;
    Ok(created(course))
}

pub async fn update_course(
    Path(id): Path<String>,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let schema = schemas::course();
    let draft =
        draft_from_multipart(&schema, multipart, &state.config.storage.preview_tmp_path).await?;
    let course: Course = match draft.encoding() {
        PayloadEncoding::Multipart => {
            let form = draft.into_multipart().map_err(AppError::Web)?;
            state.client.update_course_form(&id, form).await?
        }
        PayloadEncoding::Json => state.client.update_course(&id, &draft.to_json()).await?,
    };
    state.stores.courses.upsert(course.clone()).await;
    Ok(ok(course))
}

pub async fn delete_course(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_course(&id).await?;
    state.stores.courses.remove(&id).await;
    Ok(no_content())
}

pub async fn list_ebooks(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .ebooks
        .refresh_all(state.client.list_ebooks())
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn create_ebook(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let schema = schemas::ebook();
    let draft =
        draft_from_multipart(&schema, multipart, &state.config.storage.preview_tmp_path).await?;
    let ebook: EBook = match draft.encoding() {
        PayloadEncoding::Multipart => {
            let form = draft.into_multipart().map_err(AppError::Web)?;
            state.client.create_ebook_form(form).await?
        }
        PayloadEncoding::Json => state.client.create_ebook(&draft.to_json()).await?,
    };
    state.stores.ebooks.upsert(ebook.clone()).await;
    Ok(created(ebook))
}

pub async fn update_ebook(
    Path(id): Path<String>,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let schema = schemas::ebook();
    let draft =
        draft_from_multipart(&schema, multipart, &state.config.storage.preview_tmp_path).await?;
    let ebook: EBook = match draft.encoding() {
        PayloadEncoding::Multipart => {
            let form = draft.into_multipart().map_err(AppError::Web)?;
            state.client.update_ebook_form(&id, form).await?
        }
        PayloadEncoding::Json => state.client.update_ebook(&id, &draft.to_json()).await?,
    };
    state.stores.ebooks.upsert(ebook.clone()).await;
    Ok(ok(ebook))
}

pub async fn delete_ebook(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_ebook(&id).await?;
    state.stores.ebooks.remove(&id).await;
    Ok(no_content())
}

pub async fn list_live_classes(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .live_classes
        .refresh_all(state.client.list_live_classes())
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn create_live_class(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let schema = schemas::live_class();
    let draft =
        draft_from_multipart(&schema, multipart, &state.config.storage.preview_tmp_path).await?;
    let live_class: LiveClass = match draft.encoding() {
        PayloadEncoding::Multipart => {
            let form = draft.into_multipart().map_err(AppError::Web)?;
            state.client.create_live_class_form(form).await?
        }
        PayloadEncoding::Json => state.client.create_live_class(&draft.to_json()).await?,
    };
    state.stores.live_classes.upsert(live_class.clone()).await;
    Ok(created(live_class))
}

pub async fn update_live_class(
    Path(id): Path<String>,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let schema = schemas::live_class();
    let draft =
        draft_from_multipart(&schema, multipart, &state.config.storage.preview_tmp_path).await?;
    let live_class: LiveClass = match draft.encoding() {
        PayloadEncoding::Multipart => {
            let form = draft.into_multipart().map_err(AppError::Web)?;
            state.client.update_live_class_form(&id, form).await?
        }
        PayloadEncoding::Json => state.client.update_live_class(&id, &draft.to_json()).await?,
    };
    state.stores.live_classes.upsert(live_class.clone()).await;
    Ok(ok(live_class))
}

pub async fn delete_live_class(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_live_class(&id).await?;
    state.stores.live_classes.remove(&id).await;
    Ok(no_content())
}

#[derive(Debug, Deserialize)]
pub struct CurrentAffairsFilter {
    pub category: Option<String>,
}

pub async fn list_current_affairs(
    State(state): State<AppState>,
    Query(filter): Query<CurrentAffairsFilter>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .current_affairs
        .refresh_all(state.client.list_current_affairs(filter.category.as_deref()))
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn create_current_affairs(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let schema = schemas::current_affairs();
    let draft =
        draft_from_multipart(&schema, multipart, &state.config.storage.preview_tmp_path).await?;
    let item: CurrentAffairs = match draft.encoding() {
        PayloadEncoding::Multipart => {
            let form = draft.into_multipart().map_err(AppError::Web)?;
            state.client.create_current_affairs_form(form).await?
        }
        PayloadEncoding::Json => state.client.create_current_affairs(&draft.to_json()).await?,
    };
    state.stores.current_affairs.upsert(item.clone()).await;
    Ok(created(item))
}

pub async fn update_current_affairs(
    Path(id): Path<String>,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let schema = schemas::current_affairs();
    let draft =
        draft_from_multipart(&schema, multipart, &state.config.storage.preview_tmp_path).await?;
    let item: CurrentAffairs = match draft.encoding() {
        PayloadEncoding::Multipart => {
            let form = draft.into_multipart().map_err(AppError::Web)?;
            state.client.update_current_affairs_form(&id, form).await?
        }
        PayloadEncoding::Json => {
            state
                .client
                .update_current_affairs(&id, &draft.to_json())
                .await?
        }
    };
    state.stores.current_affairs.upsert(item.clone()).await;
    Ok(ok(item))
}

pub async fn delete_current_affairs(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_current_affairs(&id).await?;
    state.stores.current_affairs.remove(&id).await;
    Ok(no_content())
}

pub async fn list_current_affairs_categories(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .current_affairs_categories
        .refresh_all(state.client.list_current_affairs_categories())
        .await?;
    client_mode_response(&snapshot.items, &params)
}

#[derive(Debug, Deserialize)]
pub struct CurrentAffairsCategoryPayload {
    pub name: String,
}

pub async fn create_current_affairs_category(
    State(state): State<AppState>,
    Json(payload): Json<CurrentAffairsCategoryPayload>,
) -> AppResult<Response> {
    let category = state
        .client
        .create_current_affairs_category(&payload.name)
        .await?;
    state
        .stores
        .current_affairs_categories
        .upsert(category.clone())
        .await;
    Ok(created(category))
}

pub async fn delete_current_affairs_category(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_current_affairs_category(&id).await?;
    state.stores.current_affairs_categories.remove(&id).await;
    Ok(no_content())
}

pub async fn list_daily_quizzes(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .daily_quizzes
        .refresh_all(state.client.list_daily_quizzes())
        .await?;
    client_mode_response(&snapshot.items, &params)
}

pub async fn create_daily_quiz(
    State(state): State<AppState>,
    Json(payload): Json<DailyQuizCreateRequest>,
) -> AppResult<Response> {
    let quiz = state.client.create_daily_quiz(&payload).await?;
    state.stores.daily_quizzes.upsert(quiz.clone()).await;
    Ok(created(quiz))
}

pub async fn update_daily_quiz(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<DailyQuizCreateRequest>,
) -> AppResult<Response> {
    let quiz = state.client.update_daily_quiz(&id, &payload).await?;
    state.stores.daily_quizzes.upsert(quiz.clone()).await;
    Ok(ok(quiz))
}

pub async fn delete_daily_quiz(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_daily_quiz(&id).await?;
    state.stores.daily_quizzes.remove(&id).await;
    Ok(no_content())
}
