//! Error type definitions for the BrainBuzz admin service
//!
//! This module defines all error types used throughout the application.
//! Upstream API failures are flattened to a single human-readable
//! message at the client boundary so every caller sees the same string
//! a list page or form would display.

use serde::Deserialize;
use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the
/// application. It uses `thiserror` to provide automatic error trait
/// implementations and proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream API client errors
    #[error("Upstream error: {0}")]
    Client(#[from] ClientError),

    /// Web layer errors
    #[error("Web error: {0}")]
    Web(#[from] WebError),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Theme persistence errors
    #[error("Theme storage error: {message}")]
    ThemeStorage { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type AppResult<T> = Result<T, AppError>;

/// Upstream API client specific errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failures (DNS, connect, timeout)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the upstream API, already normalized to a
    /// display message
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Response body did not match the expected envelope
    #[error("Decode error for {resource}: {message}")]
    Decode { resource: String, message: String },

    /// Invalid base URL or path join
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Web layer specific errors
#[derive(Error, Debug)]
pub enum WebError {
    /// Invalid request format
    #[error("Invalid request: {field} - {message}")]
    InvalidRequest { field: String, message: String },

    /// Malformed multipart payload
    #[error("Invalid multipart payload: {message}")]
    InvalidMultipart { message: String },

    /// JSON parsing errors
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Error body shape the upstream API uses for failed requests
///
/// Both `{"message": "..."}` and `{"errors": [{"message": "..."}]}`
/// occur in the wild; the validation-errors array takes precedence.
#[derive(Debug, Deserialize, Default)]
pub struct UpstreamErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<UpstreamValidationError>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamValidationError {
    pub message: String,
}

/// Normalize an upstream failure body to one display message
///
/// Precedence: first validation-errors message, then the top-level
/// `message` field, then a generic "Failed to {verb} {resource}".
pub fn message_from_body(body: &str, verb: &str, resource: &str) -> String {
    let parsed: UpstreamErrorBody = serde_json::from_str(body).unwrap_or_default();

    if let Some(first) = parsed.errors.first() {
        return first.message.clone();
    }
    if let Some(message) = parsed.message {
        if !message.is_empty() {
            return message;
        }
    }
    format!("Failed to {verb} {resource}")
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a theme storage error
    pub fn theme_storage<S: Into<String>>(message: S) -> Self {
        Self::ThemeStorage {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl ClientError {
    /// Create an upstream error from a status code and already
    /// normalized message
    pub fn upstream<M: Into<String>>(status: u16, message: M) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error for a named resource
    pub fn decode<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        Self::Decode {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// The display message a list page or toast would show for this
    /// failure
    pub fn display_message(&self, verb: &str, resource: &str) -> String {
        match self {
            Self::Upstream { message, .. } => message.clone(),
            _ => format!("Failed to {verb} {resource}"),
        }
    }
}

impl WebError {
    /// Create an invalid request error
    pub fn invalid_request<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid multipart error
    pub fn invalid_multipart<M: Into<String>>(message: M) -> Self {
        Self::InvalidMultipart {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_array_takes_precedence() {
        let body = r#"{"message":"outer","errors":[{"message":"name is required"}]}"#;
        assert_eq!(
            message_from_body(body, "create", "course"),
            "name is required"
        );
    }

    #[test]
    fn message_field_used_when_no_errors_array() {
        let body = r#"{"message":"coupon code already exists"}"#;
        assert_eq!(
            message_from_body(body, "create", "coupon"),
            "coupon code already exists"
        );
    }

    #[test]
    fn generic_fallback_for_unparseable_body() {
        assert_eq!(
            message_from_body("<html>502</html>", "fetch", "orders"),
            "Failed to fetch orders"
        );
        assert_eq!(
            message_from_body("{}", "delete", "category"),
            "Failed to delete category"
        );
    }
}
