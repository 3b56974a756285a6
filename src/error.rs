//! Service error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and a JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{EventId, UserId};

/// JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "event not found: 7b0c…" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant                | HTTP Status               |
/// |------------------------|---------------------------|
/// | `Validation`           | 400 Bad Request           |
/// | `InsufficientCapacity` | 400 Bad Request           |
/// | `EventNotFound`        | 404 Not Found             |
/// | `UserNotFound`         | 404 Not Found             |
/// | `DuplicateEmail`       | 409 Conflict              |
/// | `Timeout`              | 500 Internal Server Error |
/// | `Database` / `Internal`| 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request validation failed before any store access.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Event with the given ID was not found.
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// User with the given ID was not found.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Another user already registered with this email address.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// The event does not have enough free seats for the request.
    #[error("insufficient capacity: requested {requested} seats, {available} available")]
    InsufficientCapacity {
        /// Seats the caller asked for.
        requested: i32,
        /// Seats the event still has free.
        available: i32,
    },

    /// A store operation exceeded its acquisition or statement timeout.
    /// Retryable; no partial effect was committed.
    #[error("store timeout: {0}")]
    Timeout(String),

    /// Unexpected store failure.
    #[error("database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InsufficientCapacity { .. } => StatusCode::BAD_REQUEST,
            Self::EventNotFound(_) | Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateEmail(_) => StatusCode::CONFLICT,
            Self::Timeout(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                Self::Timeout("timed out acquiring a database connection".to_string())
            }
            // 57014 = query_canceled: raised by statement_timeout / lock_timeout.
            sqlx::Error::Database(db) if db.code().as_deref() == Some("57014") => {
                Self::Timeout("statement cancelled by server-side timeout".to_string())
            }
            other => Self::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation("name must not be empty".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn insufficient_capacity_maps_to_400() {
        let err = ApiError::InsufficientCapacity {
            requested: 5,
            available: 3,
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let msg = err.to_string();
        assert!(msg.contains("requested 5"));
        assert!(msg.contains("3 available"));
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::EventNotFound(EventId::new());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let err = ApiError::UserNotFound(UserId::new());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_email_maps_to_409() {
        let err = ApiError::DuplicateEmail("a@x.com".to_string());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn timeout_and_database_map_to_500() {
        assert_eq!(
            ApiError::Timeout("pool".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Database("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn pool_timeout_converts_to_timeout_variant() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, ApiError::Timeout(_)));
    }

    #[test]
    fn row_not_found_converts_to_database_variant() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::Database(_)));
    }
}
