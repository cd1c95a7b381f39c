use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

use super::error::{ApiError, ApiResult};
use crate::domain::{
    BlobId, Observation, ObservationPatch, ProjectId, ProjectPatch, Recommendation,
};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub template_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddObservationRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<BlobId>,
}

#[derive(Debug, Deserialize)]
pub struct AddRecommendationRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

pub(super) fn parse_project_id(raw: &str) -> Result<ProjectId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid project ID: {}", raw)))
}

#[tracing::instrument(skip(state, request), fields(template_id = %request.template_id))]
pub async fn create_project_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<impl IntoResponse> {
    let project = state
        .project_service
        .create_from_template(&request.template_id, request.name, request.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn list_projects_handler(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let projects = state.project_service.list_projects().await?;
    Ok(Json(projects))
}

#[tracing::instrument(skip(state))]
pub async fn get_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;
    let resolved = state.project_service.get_resolved_project(id).await?;
    Ok(Json(resolved))
}

#[tracing::instrument(skip(state, patch))]
pub async fn update_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;
    let project = state.project_service.update_project(id, patch).await?;
    Ok(Json(project))
}

#[tracing::instrument(skip(state, request))]
pub async fn add_observation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddObservationRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;

    let observation_id = request
        .id
        .filter(|i| !i.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let mut observation = Observation::new(observation_id, request.title);
    if let Some(content) = request.content {
        observation = observation.with_content(content);
    }
    if let Some(image) = request.image {
        observation = observation.with_image(image);
    }

    let project = state.project_service.add_observation(id, observation).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

#[tracing::instrument(skip(state, patch))]
pub async fn update_observation_handler(
    State(state): State<AppState>,
    Path((id, observation_id)): Path<(String, String)>,
    Json(patch): Json<ObservationPatch>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;
    let project = state
        .project_service
        .update_observation(id, &observation_id, patch)
        .await?;
    Ok(Json(project))
}

#[tracing::instrument(skip(state))]
pub async fn remove_observation_handler(
    State(state): State<AppState>,
    Path((id, observation_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;
    let project = state
        .project_service
        .remove_observation(id, &observation_id)
        .await?;
    Ok(Json(project))
}

#[tracing::instrument(skip(state, recommendations))]
pub async fn replace_recommendations_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(recommendations): Json<Vec<Recommendation>>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;
    let project = state
        .project_service
        .replace_recommendations(id, recommendations)
        .await?;
    Ok(Json(project))
}

#[tracing::instrument(skip(state, request))]
pub async fn add_recommendation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddRecommendationRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;
    let recommendation_id = request
        .id
        .filter(|i| !i.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let project = state
        .project_service
        .add_recommendation(id, Recommendation::new(recommendation_id, request.text))
        .await?;
    Ok((StatusCode::CREATED, Json(project)))
}

#[tracing::instrument(skip(state))]
pub async fn remove_recommendation_handler(
    State(state): State<AppState>,
    Path((id, recommendation_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_project_id(&id)?;
    let project = state
        .project_service
        .remove_recommendation(id, &recommendation_id)
        .await?;
    Ok(Json(project))
}
