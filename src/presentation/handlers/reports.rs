use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::projects::parse_project_id;
use crate::domain::BlobId;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GetReportQuery {
    #[serde(default)]
    pub id: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn generate_report_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;
    let published = state.report_service.generate(id).await?;

    tracing::info!(
        storage_id = %published.storage_id,
        file_name = %published.file_name,
        bookmark_saved = published.bookmark_saved,
        "Report generated"
    );

    Ok((StatusCode::CREATED, Json(published)))
}

/// Serves a stored report by its storage id as an HTML page.
#[tracing::instrument(skip(state))]
pub async fn get_report_handler(
    State(state): State<AppState>,
    Query(query): Query<GetReportQuery>,
) -> ApiResult<impl IntoResponse> {
    let raw = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing report id".to_string()))?;

    let id = BlobId::parse(&raw).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let html = state.blob_store.fetch(&id).await.map_err(|e| {
        tracing::warn!(report_id = %id, error = %e, "Report not available");
        ApiError::from(e)
    })?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    ))
}
