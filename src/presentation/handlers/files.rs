use std::io;

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use futures::{StreamExt, TryStreamExt};
use http_body_util::LengthLimitError;
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use crate::domain::BlobId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadTargetResponse {
    pub upload_url: String,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub storage_id: BlobId,
    pub size_bytes: u64,
}

#[derive(Serialize)]
pub struct FileUrlResponse {
    pub url: Option<String>,
}

fn parse_blob_id(raw: &str) -> Result<BlobId, ApiError> {
    BlobId::parse(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Streamed bodies that outgrow the router's body limit surface as
/// `FileTooLarge` so the response is 413 rather than 500.
fn upload_stream_error(e: axum::Error) -> io::Error {
    let inner = e.into_inner();
    if inner.is::<LengthLimitError>() {
        io::Error::new(io::ErrorKind::FileTooLarge, inner)
    } else {
        io::Error::other(inner)
    }
}

pub async fn upload_url_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(UploadTargetResponse {
        upload_url: state.blob_store.upload_target(),
    })
}

/// Raw-body upload; the request's `Content-Type` picks the blob's extension.
#[tracing::instrument(skip(state, headers, body))]
pub async fn upload_file_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> ApiResult<impl IntoResponse> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let stream = body.into_data_stream().map_err(upload_stream_error).boxed();

    let stored = state.blob_store.store(&content_type, stream).await?;

    tracing::info!(
        storage_id = %stored.id,
        bytes = stored.size_bytes,
        content_type = %content_type,
        "File uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            storage_id: stored.id,
            size_bytes: stored.size_bytes,
        }),
    ))
}

#[tracing::instrument(skip(state))]
pub async fn get_file_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_blob_id(&id)?;
    let data = state.blob_store.fetch(&id).await?;
    Ok(([(header::CONTENT_TYPE, id.content_type())], data))
}

pub async fn file_url_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_blob_id(&id)?;
    let url = state.blob_store.get_url(&id).await?;
    Ok(Json(FileUrlResponse { url }))
}
