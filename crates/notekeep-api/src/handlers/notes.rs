//! Note HTTP handlers.
//!
//! Both handlers check the gateway's connection state before doing anything
//! else, so a disconnected store is reported ahead of input validation.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::{debug, warn};

use notekeep_core::{CreateNoteRequest, Note};

use crate::error::{ApiError, MISSING_CONTENT, UNEXPECTED_ERROR};
use crate::AppState;

/// Summary used when listing fails for a reason other than the store.
pub const LIST_UNEXPECTED: &str = "An error occurred";

/// Create a note.
///
/// # Returns
/// - 201 Created with the stored note
/// - 400 Bad Request if the body is not a JSON object with a `content` key
/// - 500 if the store is disconnected or the insert fails
pub async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let notes = state.gateway.collection().ok_or(ApiError::NotConnected)?;

    let req = CreateNoteRequest::from_slice(&body).map_err(|e| {
        warn!(subsystem = "api", op = "create_note", error = %e, "Rejected create request");
        ApiError::BadRequest(MISSING_CONTENT.to_string())
    })?;

    let note = notes
        .insert(req.content)
        .await
        .map_err(|e| ApiError::from_store(e, UNEXPECTED_ERROR))?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// List every note.
///
/// # Returns
/// - 200 OK with a JSON array of notes (order not guaranteed)
/// - 500 if the store is disconnected or the scan fails
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.gateway.collection().ok_or(ApiError::NotConnected)?;

    let all = notes
        .list_all()
        .await
        .map_err(|e| ApiError::from_store(e, LIST_UNEXPECTED))?;

    debug!(subsystem = "api", op = "list_notes", result_count = all.len(), "Listed notes");
    Ok(Json(all))
}
