//! Guardian Error Types
//!
//! Module-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Guardian-specific result type alias
pub type GuardianResult<T> = Result<T, GuardianError>;

/// Guardian-specific error variants
#[derive(Debug, Error)]
pub enum GuardianError {
    /// Level number outside the configured range
    #[error("invalid level: {0}")]
    InvalidLevel(u8),

    /// Player message empty or over the length limit
    #[error("message must be between 1 and 2000 characters")]
    InvalidMessage,

    /// The chat provider failed or timed out on the main completion.
    /// Guard-classifier trouble never surfaces here; it resolves via the
    /// configured fail mode.
    #[error("chat model unavailable: {0}")]
    ModelUnavailable(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl GuardianError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GuardianError::InvalidLevel(_) => StatusCode::NOT_FOUND,
            GuardianError::InvalidMessage => StatusCode::BAD_REQUEST,
            GuardianError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GuardianError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuardianError::InvalidLevel(_) => ErrorKind::NotFound,
            GuardianError::InvalidMessage => ErrorKind::BadRequest,
            GuardianError::ModelUnavailable(_) => ErrorKind::ServiceUnavailable,
            GuardianError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            GuardianError::ModelUnavailable(msg) => {
                tracing::error!(message = %msg, "Chat model unavailable");
            }
            GuardianError::Internal(msg) => {
                tracing::error!(message = %msg, "Guardian internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Guardian error");
            }
        }
    }
}

impl From<levels::InvalidLevel> for GuardianError {
    fn from(err: levels::InvalidLevel) -> Self {
        GuardianError::InvalidLevel(err.0)
    }
}

impl From<GuardianError> for AppError {
    fn from(err: GuardianError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for GuardianError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
