//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into the JSON error envelope
//! `{"success": false, "error": <status>, "message": <text>}`.
//! The detail carried by each variant is logged server-side only; clients
//! see the fixed message for the status.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use trivia_core::CoreError;
use trivia_service::ServiceError;

/// API error with HTTP status code and server-side detail.
///
/// Use via `Result<Json<T>, ApiError>` in handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed request syntax (bad `page`).
    BadRequest(String),
    /// 404 Not Found: unknown route, id or category, or an empty listing.
    NotFound(String),
    /// 405 Method Not Allowed: known route, unsupported method.
    MethodNotAllowed,
    /// 422 Unprocessable Entity: malformed body, missing field, or a store failure.
    Unprocessable(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad request",
            Self::NotFound(_) => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable(_) => "unprocessable",
            Self::Internal(_) => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(err) => tracing::error!(error = ?err, "internal server error"),
            Self::Unprocessable(detail) => tracing::warn!(%detail, "unprocessable request"),
            Self::BadRequest(detail) | Self::NotFound(detail) => {
                tracing::debug!(status = %self.status(), %detail, "request rejected");
            },
            Self::MethodNotAllowed => tracing::debug!("method not allowed"),
        }
        let status = self.status();
        let body =
            ErrorEnvelope { success: false, error: status.as_u16(), message: self.message() };
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// Reference mapping: not-found is 404, every store failure or rejected
/// input is 422. Store failures are logged here at error level.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_not_found() {
            return Self::NotFound(err.to_string());
        }
        match err {
            ServiceError::InvalidInput(msg) => Self::Unprocessable(msg),
            ServiceError::Storage(e) => {
                tracing::error!(error = %e, transient = e.is_transient(), "store failure");
                Self::Unprocessable(e.to_string())
            },
            other @ ServiceError::NotFound { .. } => Self::NotFound(other.to_string()),
        }
    }
}

/// Only page parsing reaches the HTTP layer as a bare `CoreError`.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Non-integer ids never match a route, as with a typed path converter.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::NotFound(rejection.body_text())
    }
}
