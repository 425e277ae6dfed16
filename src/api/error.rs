// ABOUTME: Boundary mapping from domain error kinds to HTTP responses.

use crate::engine::{EngineError, EngineErrorKind};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Transport-level error: a domain failure or a rejected request.
#[derive(Debug)]
pub enum ApiError {
    Engine(EngineError),
    InvalidRequest(String),
}

impl ApiError {
    pub(crate) fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest(message.into())
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        ApiError::Engine(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, "invalid_request", message.clone())
            }
            ApiError::Engine(error) => {
                let (status, code) = match error.kind() {
                    EngineErrorKind::Unavailable => {
                        (StatusCode::SERVICE_UNAVAILABLE, "engine_unavailable")
                    }
                    EngineErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
                    EngineErrorKind::NotRunning => (StatusCode::CONFLICT, "not_running"),
                    EngineErrorKind::Operation => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "operation_failed")
                    }
                };
                (status, code, error.to_string())
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));
        (status, body).into_response()
    }
}
