// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
///
/// The carried string is diagnostic only. Clients always receive the fixed
/// message for the status code.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found (also used for empty listings)
    NotFound(String),

    // 422 Unprocessable Entity (a store mutation did not go through)
    Unprocessable(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent back in the `message` field of the envelope.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad request",
            AppError::NotFound(_) => "resource not found",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::InternalServerError(_) => "internal server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Renders `{"success": false, "error": <code>, "message": <msg>}`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg)
            }
            AppError::Unprocessable(msg) => tracing::warn!("Unprocessable: {}", msg),
            AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                tracing::debug!("{}: {}", self.public_message(), msg)
            }
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.public_message(),
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on store calls.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// Policy for listings: an empty result is reported as `NotFound`.
///
/// Every listing endpoint funnels through here, so the engines themselves
/// never decide what "no rows" means over HTTP.
pub fn ensure_found<T>(items: Vec<T>, what: &str) -> Result<Vec<T>, AppError> {
    if items.is_empty() {
        Err(AppError::NotFound(format!("no {} found", what)))
    } else {
        Ok(items)
    }
}

/// Fallback handler for unmatched routes.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("no route matched".to_string())
}
