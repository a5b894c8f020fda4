//! Judge Error Types
//!
//! Module-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::signer::SignerError;
use thiserror::Error;

use crate::domain::value_objects::AddressParseError;

/// Judge-specific result type alias
pub type JudgeResult<T> = Result<T, JudgeError>;

/// Judge-specific error variants
///
/// Note what is *not* here: an incorrect guess is a negative verdict, not an
/// error, and replay attempts answer with an "already completed" status.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// Level number outside the configured range
    #[error("invalid level: {0}")]
    InvalidLevel(u8),

    /// Malformed wallet address
    #[error(transparent)]
    InvalidAddress(#[from] AddressParseError),

    /// Submission over the accepted length
    #[error("password must be at most 100 characters")]
    SubmissionTooLong,

    /// No signing key configured; fail closed, never a partial authorization
    #[error("signing service unavailable")]
    SigningUnavailable,

    /// The signing operation itself failed
    #[error("signing failed: {0}")]
    Signing(#[from] SignerError),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl JudgeError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            JudgeError::InvalidLevel(_) => StatusCode::NOT_FOUND,
            JudgeError::InvalidAddress(_) | JudgeError::SubmissionTooLong => {
                StatusCode::BAD_REQUEST
            }
            JudgeError::SigningUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            JudgeError::Signing(_) | JudgeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            JudgeError::InvalidLevel(_) => ErrorKind::NotFound,
            JudgeError::InvalidAddress(_) | JudgeError::SubmissionTooLong => ErrorKind::BadRequest,
            JudgeError::SigningUnavailable => ErrorKind::ServiceUnavailable,
            JudgeError::Signing(_) | JudgeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            JudgeError::SigningUnavailable => {
                tracing::error!("Signing key not configured");
            }
            JudgeError::Signing(e) => {
                tracing::error!(error = %e, "Signing operation failed");
            }
            JudgeError::Internal(msg) => {
                tracing::error!(message = %msg, "Judge internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Judge error");
            }
        }
    }
}

impl From<levels::InvalidLevel> for JudgeError {
    fn from(err: levels::InvalidLevel) -> Self {
        JudgeError::InvalidLevel(err.0)
    }
}

impl From<JudgeError> for AppError {
    fn from(err: JudgeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for JudgeError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            JudgeError::InvalidLevel(0).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            JudgeError::InvalidAddress(AddressParseError).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            JudgeError::SubmissionTooLong.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            JudgeError::SigningUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            JudgeError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_preserves_status() {
        let response = JudgeError::SigningUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = JudgeError::InvalidLevel(99).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
