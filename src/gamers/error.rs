//! Error types for the gamer resource handlers.

use std::error::Error;
use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// Error type for gamer handler operations.
#[derive(Debug)]
pub enum ApiError {
    /// No record with the requested id.
    NotFound(String),
    /// Request body was missing, not JSON, or not a JSON object.
    MalformedBody(String),
    /// Record store failure (file I/O, serialization, poisoned lock).
    Store(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(id) => write!(f, "gamer not found: {}", id),
            ApiError::MalformedBody(msg) => write!(f, "malformed request body: {}", msg),
            ApiError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Not-found answers with a bare status; everything else carries
/// `{ "error": "<message>" }`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::NotFound(id) => {
                tracing::debug!(%id, "gamer not found");
                status.into_response()
            }
            ApiError::MalformedBody(_) => {
                tracing::debug!(error = %self, "rejected request body");
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
            ApiError::Store(_) => {
                tracing::error!(error = %self, "gamer request failed");
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
        }
    }
}
