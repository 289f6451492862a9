//! Application error taxonomy and HTTP mapping.
//!
//! Every failure path in the services produces one of these kinds; handlers
//! never leak internal storage error text to the caller. `StorageUnavailable`
//! is the only class treated as possibly transient and answered with a
//! `Retry-After` hint.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Seconds suggested to the client before retrying after a storage outage.
const RETRY_AFTER_SECS: &str = "5";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("username is already taken")]
    DuplicateUsername,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("short link not found")]
    NotFound,

    #[error("short link has expired")]
    Expired,

    #[error("short link belongs to another user")]
    Forbidden,

    #[error("could not find a free alias after {attempts} attempts")]
    AliasSpaceExhausted { attempts: u32 },

    #[error("alias generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("storage is temporarily unavailable")]
    StorageUnavailable,

    #[error("{message}")]
    Validation { message: String },

    #[error("internal error")]
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn generation_failed(reason: impl Into<String>) -> Self {
        Self::GenerationFailed {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateUsername => "duplicate_username",
            Self::InvalidCredentials => "invalid_credentials",
            Self::NotFound => "not_found",
            Self::Expired => "expired",
            Self::Forbidden => "forbidden",
            Self::AliasSpaceExhausted { .. } => "alias_space_exhausted",
            Self::GenerationFailed { .. } => "generation_failed",
            Self::StorageUnavailable => "storage_unavailable",
            Self::Validation { .. } => "validation_error",
            Self::Internal => "internal_error",
        }
    }

    /// HTTP status the kind maps to at the facade boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::DuplicateUsername | Self::InvalidCredentials | Self::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Expired => StatusCode::GONE,
            Self::AliasSpaceExhausted { .. } | Self::GenerationFailed { .. } | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::SERVICE_UNAVAILABLE {
            response.headers_mut().insert(
                header::RETRY_AFTER,
                header::HeaderValue::from_static(RETRY_AFTER_SECS),
            );
        }

        response
    }
}

/// Residual database errors become `StorageUnavailable`.
///
/// Unique-constraint violations carry meaning (duplicate username, alias
/// collision) and are translated inside the repositories before this
/// conversion is reached.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("database error: {e}");
        Self::StorageUnavailable
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::DuplicateUsername.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Expired.status(), StatusCode::GONE);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::AliasSpaceExhausted { attempts: 10 }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::generation_failed("provider unreachable").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::StorageUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AppError::DuplicateUsername.code(), "duplicate_username");
        assert_eq!(AppError::NotFound.code(), "not_found");
        assert_eq!(AppError::Expired.code(), "expired");
        assert_eq!(AppError::StorageUnavailable.code(), "storage_unavailable");
    }

    #[test]
    fn test_sqlx_error_is_masked() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::StorageUnavailable));
        // The caller-visible message never carries driver details.
        assert_eq!(err.to_string(), "storage is temporarily unavailable");
    }

    #[test]
    fn test_retry_after_on_storage_unavailable() {
        let response = AppError::StorageUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.headers().contains_key(header::RETRY_AFTER));
    }
}
