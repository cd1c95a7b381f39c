use std::io;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{BlobStoreError, RepositoryError, TranscriptionError};
use crate::application::services::{ProjectServiceError, PublishError, ReportError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler-level error; every variant renders as `{ "error": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(_) => ApiError::NotFound(e.to_string()),
            RepositoryError::ConstraintViolation(_) | RepositoryError::Rejected(_) => {
                ApiError::Conflict(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<BlobStoreError> for ApiError {
    fn from(e: BlobStoreError) -> Self {
        match e {
            BlobStoreError::NotFound(_) => ApiError::NotFound(e.to_string()),
            BlobStoreError::Io(io) if io.kind() == io::ErrorKind::FileTooLarge => {
                ApiError::PayloadTooLarge(io.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ProjectServiceError> for ApiError {
    fn from(e: ProjectServiceError) -> Self {
        match e {
            ProjectServiceError::NotFound(_) | ProjectServiceError::UnknownTemplate(_) => {
                ApiError::NotFound(e.to_string())
            }
            ProjectServiceError::Invalid(_) => ApiError::Conflict(e.to_string()),
            ProjectServiceError::Repository(inner) => inner.into(),
            ProjectServiceError::BlobStore(inner) => inner.into(),
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::ProjectNotFound(_) => ApiError::NotFound(e.to_string()),
            ReportError::Load(inner) => inner.into(),
            ReportError::Render(_) => ApiError::Internal(e.to_string()),
            ReportError::Publish(PublishError::Store(inner)) => inner.into(),
            ReportError::Publish(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<TranscriptionError> for ApiError {
    fn from(e: TranscriptionError) -> Self {
        match e {
            TranscriptionError::MissingCredential => ApiError::Unavailable(e.to_string()),
            TranscriptionError::AudioUnavailable(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
