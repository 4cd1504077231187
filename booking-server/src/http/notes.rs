//! Notes endpoint
//!
//! `POST /api/notes` creates a note. Every failure between the request body
//! and the database is reported the same way: `500` with a
//! `Failed to send data` body. Other methods get `405`.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use booking_core::NewNote;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::AppState;

/// Body of a create request. Fields are optional here so a missing one
/// surfaces as a persistence failure rather than a framework rejection.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return failed_to_send(rejection.body_text()),
    };

    let created = NewNote::from_parts(request.title, request.content)
        .and_then(|note| state.notes.create(&note));

    match created {
        Ok(note) => {
            info!(note_id = note.id, "created note");
            (StatusCode::OK, Json(note)).into_response()
        }
        Err(e) => failed_to_send(e.to_string()),
    }
}

/// Any method other than POST on /api/notes
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".into(),
            details: None,
        }),
    )
        .into_response()
}

fn failed_to_send(details: String) -> Response {
    warn!(%details, "failed to create note");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to send data".into(),
            details: Some(details),
        }),
    )
        .into_response()
}
