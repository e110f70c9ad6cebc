//! HTTP error mapping.

use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use notekeep_core::Error;

/// Message returned when the create body has no usable `content` key.
pub const MISSING_CONTENT: &str = "Missing 'content' in request body";

/// Summary for failures that did not come from the store.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Debug)]
pub enum ApiError {
    /// The storage gateway started without a live store connection.
    NotConnected,
    BadRequest(String),
    /// The store rejected or failed an otherwise valid request.
    Database(Error),
    /// Anything else; `error` is the handler-specific summary.
    Unexpected {
        error: &'static str,
        details: String,
    },
}

impl ApiError {
    /// Classify a gateway failure. `unexpected` is the summary used when the
    /// failure did not come from the store itself.
    pub fn from_store(err: Error, unexpected: &'static str) -> Self {
        match err {
            Error::NotConnected => ApiError::NotConnected,
            err if err.is_operation_failure() => ApiError::Database(err),
            err => ApiError::Unexpected {
                error: unexpected,
                details: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::NotConnected => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Database not connected" }),
            ),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            ApiError::Database(err) => {
                let details = match err {
                    Error::Database(inner) => inner.to_string(),
                    other => other.to_string(),
                };
                error!(subsystem = "api", error = %details, "Database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": "Database operation failed",
                        "details": details,
                    }),
                )
            }
            ApiError::Unexpected {
                error: summary,
                details,
            } => {
                error!(subsystem = "api", error = %details, "{}", summary);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": summary, "details": details }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_connected_passes_through() {
        let err = ApiError::from_store(Error::NotConnected, "An error occurred");
        assert!(matches!(err, ApiError::NotConnected));
    }

    #[test]
    fn test_store_errors_are_database_failures() {
        let err = ApiError::from_store(
            Error::Database(sqlx::Error::PoolTimedOut),
            "An error occurred",
        );
        assert!(matches!(err, ApiError::Database(_)));
    }

    #[test]
    fn test_other_errors_use_handler_summary() {
        let err = ApiError::from_store(
            Error::Internal("lost write".to_string()),
            "An unexpected error occurred",
        );
        match err {
            ApiError::Unexpected { error, details } => {
                assert_eq!(error, "An unexpected error occurred");
                assert!(details.contains("lost write"));
            }
            other => panic!("Expected Unexpected, got {:?}", other),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotConnected.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::BadRequest(MISSING_CONTENT.to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
