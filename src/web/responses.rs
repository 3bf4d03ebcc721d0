//! HTTP response types and utilities
//!
//! Standardized response types and error handling for the admin API,
//! ensuring consistent shapes across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::{AppError, ClientError};
use crate::table::{PageItem, TableView};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Request timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Paginated response wrapper, built from a table engine view so every
/// list endpoint shares identical pagination semantics
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse {
    pub items: Vec<Value>,
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    /// Page-number strip for the pagination control; gaps are `"..."`
    pub window: Vec<PageItem>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginatedResponse {
    pub fn from_view(view: &TableView<'_>) -> Self {
        Self {
            items: view.rows.iter().map(|row| (*row).clone()).collect(),
            total: view.total,
            page: view.page,
            limit: view.limit,
            total_pages: view.total_pages,
            window: view.window.clone(),
            has_next: !view.next_disabled,
            has_previous: !view.prev_disabled,
        }
    }
}

/// Convert AppError to the appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let (status, message) = match &error {
        AppError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::NotFound { resource, id } => (
            StatusCode::NOT_FOUND,
            format!("{resource} with id '{id}' not found"),
        ),
        AppError::Client(client_error) => match client_error {
            ClientError::Upstream { status, message } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                message.clone(),
            ),
            _ => (
                StatusCode::BAD_GATEWAY,
                "Upstream service communication failed".to_string(),
            ),
        },
        AppError::Web(web_error) => (StatusCode::BAD_REQUEST, web_error.to_string()),
        AppError::Configuration { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Configuration error: {message}"),
        ),
        AppError::ThemeStorage { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Theme storage error: {message}"),
        ),
        AppError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal error: {message}"),
        ),
    };

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}

/// Success response helpers
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::success(data))).into_response()
}

pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
