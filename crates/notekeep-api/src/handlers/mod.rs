//! HTTP handlers for notekeep-api.

pub mod notes;

use axum::response::Response;

use crate::error::{ApiError, UNEXPECTED_ERROR};

/// Acknowledgment returned by `GET /`.
pub const HOME_MESSAGE: &str = "Flask Backend for Notes App is running!";

/// Liveness acknowledgment. Never touches the store.
pub async fn home() -> &'static str {
    HOME_MESSAGE
}

/// Render a handler panic as a 500 instead of dropping the connection.
pub fn handle_panic(payload: Box<dyn std::any::Any + Send + 'static>) -> Response {
    use axum::response::IntoResponse;

    let details = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Unexpected {
        error: UNEXPECTED_ERROR,
        details,
    }
    .into_response()
}
