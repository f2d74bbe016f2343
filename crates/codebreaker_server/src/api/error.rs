//! Mapping engine and extractor failures to HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use codebreaker::{EngineError, ErrorKind};
use tracing::{error, warn};

use super::dto::ErrorResponse;

/// An HTTP error with a `{message}` body.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Response status.
    pub status: StatusCode,
    /// Client-facing message.
    pub message: String,
}

impl ApiError {
    /// Creates an error response.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

/// HTTP status for each engine error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::GameNotFound => StatusCode::NOT_FOUND,
        ErrorKind::GameCompleted
        | ErrorKind::InvalidGuess
        | ErrorKind::OutOfHints
        | ErrorKind::InvalidRules
        | ErrorKind::MaxHintsTooLarge => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let status = status_for(err.kind);
        if err.kind.is_client_error() {
            warn!(kind = %err.kind, message = %err.message, "Request rejected");
            Self::new(status, err.message)
        } else {
            error!(error = %err, "Internal engine error");
            Self::new(status, "An internal error occurred")
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Malformed request body");
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!(error = %rejection, "Malformed path");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}
