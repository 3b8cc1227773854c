//! HTTP error mapping for board operations.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::board::{
    ports::{AccessError, BoardRepositoryError},
    services::BoardServiceError,
};

/// Error returned by every handler.
///
/// Each variant maps to one status code; the message is sent to the client
/// as `{"message": "..."}`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request carried no valid credential.
    #[error("{0}")]
    Unauthorized(String),

    /// The addressed board, section, or task does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The payload failed validation or could not be parsed.
    #[error("{0}")]
    Validation(String),

    /// The board changed after it was read.
    #[error("{0}")]
    Conflict(String),

    /// Storage failed; details are logged, not returned.
    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Returns the status code this error is reported with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<BoardServiceError> for ApiError {
    fn from(err: BoardServiceError) -> Self {
        match err {
            BoardServiceError::BoardNotFound(_) => Self::NotFound("Board not found".to_owned()),
            BoardServiceError::Domain(domain) if domain.is_not_found() => {
                Self::NotFound(domain.to_string())
            }
            BoardServiceError::Domain(domain) => Self::Validation(domain.to_string()),
            BoardServiceError::Repository(repository) => repository.into(),
        }
    }
}

impl From<BoardRepositoryError> for ApiError {
    fn from(err: BoardRepositoryError) -> Self {
        match err {
            BoardRepositoryError::NotFound(_) => Self::NotFound("Board not found".to_owned()),
            BoardRepositoryError::Conflict { .. } | BoardRepositoryError::DuplicateBoard(_) => {
                warn!(error = %err, "rejected concurrent board write");
                Self::Conflict("Board was modified by another request; reload and retry".to_owned())
            }
            BoardRepositoryError::Persistence(_) => {
                error!(error = %err, "board storage failed");
                Self::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        Self::Unauthorized(err.to_string())
    }
}
