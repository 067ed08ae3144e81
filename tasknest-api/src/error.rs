/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// Handlers return `Result<T, ApiError>`, which converts into the standard
/// failure envelope with the appropriate status code.
///
/// Status mapping:
///
/// - `BadRequest` → 400 (malformed identifier, missing/empty required field,
///   unparseable body)
/// - `NotFound` → 404 (operation targeted a non-existent row)
/// - `Conflict` → 500 (uniqueness violation; kept distinguishable from other
///   store failures by its message)
/// - `StoreError` → 500 (any other store-reported failure)
/// - `ServiceUnavailable` → 503 (pool timeout, store unreachable)
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::response;
use tasknest_shared::error::RepoError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400)
    BadRequest(String),

    /// Not found (404)
    NotFound(String),

    /// Uniqueness conflict, e.g. duplicate email (500)
    Conflict(String),

    /// Store-reported failure (500)
    StoreError(String),

    /// Store unreachable or pool exhausted (503)
    ServiceUnavailable(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::StoreError(msg) => write!(f, "Store error: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// The HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => msg,
            ApiError::StoreError(msg) => {
                tracing::error!("Store error: {}", msg);
                msg
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                msg
            }
        };

        response::failure(status, message)
    }
}

/// Convert repository errors to API errors
impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::BadRequest(msg) => ApiError::BadRequest(msg),
            RepoError::NotFound(_) => ApiError::NotFound(err.to_string()),
            RepoError::Conflict(msg) => ApiError::Conflict(msg),
            RepoError::PoolTimeout => ApiError::ServiceUnavailable(err.to_string()),
            RepoError::Connection(_) => ApiError::ServiceUnavailable(err.to_string()),
            RepoError::Store(e) => ApiError::StoreError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("invalid id".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid id");

        let err = ApiError::NotFound("User not found".to_string());
        assert_eq!(err.to_string(), "Not found: User not found");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound(String::new()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::StoreError(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::ServiceUnavailable(String::new()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_repo_not_found_maps_to_404_with_title() {
        let err: ApiError = RepoError::NotFound("User").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: User not found");
    }

    #[test]
    fn test_repo_pool_timeout_maps_to_503() {
        let err: ApiError = RepoError::PoolTimeout.into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_repo_conflict_keeps_message() {
        let err: ApiError =
            RepoError::Conflict("duplicate key value violates unique constraint".to_string())
                .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("unique constraint"));
    }

    #[test]
    fn test_into_response_carries_status() {
        let response = ApiError::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
