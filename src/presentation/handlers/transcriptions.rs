use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use super::error::ErrorResponse;
use crate::application::ports::TranscriptionError;
use crate::domain::AudioClip;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

fn error_response(status: StatusCode, error: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Accepts a multipart upload whose first file field is the recording.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcription_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    if !state.transcription_service.is_configured() {
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            TranscriptionError::MissingCredential.to_string(),
        );
    }

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Transcription request with no audio");
            return error_response(StatusCode::BAD_REQUEST, "No audio uploaded".to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let file_name = field.file_name().map(String::from);

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio bytes");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read audio: {}", e),
            );
        }
    };

    tracing::debug!(bytes = data.len(), file_name = ?file_name, "Audio received");

    let clip = AudioClip::new(data.to_vec(), file_name.as_deref());

    match state.transcription_service.transcribe_clip(&clip).await {
        Ok(text) => {
            tracing::info!(transcript = %preview_text(&text), "Transcription served");
            (StatusCode::OK, Json(TranscriptionResponse { text })).into_response()
        }
        Err(TranscriptionError::AudioUnavailable(reason)) => {
            error_response(StatusCode::BAD_REQUEST, reason)
        }
        Err(TranscriptionError::MissingCredential) => error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            TranscriptionError::MissingCredential.to_string(),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
