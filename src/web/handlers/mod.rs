//! HTTP request handlers organized by admin section
//!
//! Handlers are thin: refresh the resource store through the client,
//! run the table engine over the snapshot, and wrap the result in the
//! standard response types.

use axum::extract::Multipart;
use axum::response::Response;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{AppError, AppResult, WebError};
use crate::forms::{FieldKind, FormDraft, FormSchema};
use crate::models::PageInfo;
use crate::table::{build_view, TableState};
use crate::web::extractors::TableQueryParams;
use crate::web::responses::{ok, PaginatedResponse};

pub mod catalog;
pub mod commerce;
pub mod content;
pub mod forms;
pub mod health;
pub mod test_series;
pub mod theme;

fn rows_to_values<T: Serialize>(items: &[T]) -> AppResult<Vec<Value>> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(|e| AppError::Web(WebError::from(e))))
        .collect()
}

/// Client-mode listing: the engine searches and slices the cached
/// collection locally.
pub(crate) fn client_mode_response<T: Serialize>(
    items: &[T],
    params: &TableQueryParams,
) -> AppResult<Response> {
    let rows = rows_to_values(items)?;
    let state = params.table_state();
    let view = build_view(&rows, false, None, false, &state);
    Ok(ok(PaginatedResponse::from_view(&view)))
}

/// Server-mode listing: the upstream API already paginated; the engine
/// is a pure view over its metadata.
pub(crate) fn server_mode_response<T: Serialize>(
    items: &[T],
    pagination: Option<&PageInfo>,
) -> AppResult<Response> {
    let rows = rows_to_values(items)?;
    let view = build_view(&rows, false, pagination, true, &TableState::new());
    Ok(ok(PaginatedResponse::from_view(&view)))
}

/// Build a validated form draft from a multipart request body.
///
/// Unknown fields are ignored; file parts get a scoped preview in
/// `preview_dir`.
pub(crate) async fn draft_from_multipart(
    schema: &FormSchema,
    mut multipart: Multipart,
    preview_dir: &std::path::Path,
) -> AppResult<FormDraft> {
    let mut draft = schema.seed(&Value::Null);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Web(WebError::invalid_multipart(e.to_string())))?
    {
        let name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let Some(spec) = schema.field(&name) else {
            continue;
        };

        if spec.kind == FieldKind::File {
            let file_name = field
                .file_name()
                .unwrap_or("upload")
                .to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Web(WebError::invalid_multipart(e.to_string())))?;
            if bytes.is_empty() {
                // An empty file input means "keep the existing upload"
                continue;
            }
            draft
                .attach_file(&name, file_name, content_type, bytes.to_vec(), Some(preview_dir))
                .map_err(|e| AppError::internal(e.to_string()))?;
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::Web(WebError::invalid_multipart(e.to_string())))?;
            draft.set_value(&name, text);
        }
    }

    schema
        .validate(&draft)
        .map_err(|errors| AppError::validation(errors.join(", ")))?;
    Ok(draft)
}
