use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    add_observation_handler, add_recommendation_handler, create_project_handler,
    file_url_handler, generate_report_handler, get_file_handler, get_project_handler,
    get_report_handler, health_handler, list_projects_handler, list_templates_handler,
    remove_observation_handler, remove_recommendation_handler, replace_recommendations_handler,
    transcription_handler, update_observation_handler, update_project_handler,
    upload_file_handler, upload_url_handler,
};
use crate::presentation::state::AppState;

/// Upper bound for photo and audio uploads. Enforced on every body, streamed
/// or buffered.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/getReport", get(get_report_handler))
        .route("/api/v1/templates", get(list_templates_handler))
        .route(
            "/api/v1/projects",
            post(create_project_handler).get(list_projects_handler),
        )
        .route(
            "/api/v1/projects/{id}",
            get(get_project_handler).patch(update_project_handler),
        )
        .route(
            "/api/v1/projects/{id}/observations",
            post(add_observation_handler),
        )
        .route(
            "/api/v1/projects/{id}/observations/{observation_id}",
            axum::routing::patch(update_observation_handler).delete(remove_observation_handler),
        )
        .route(
            "/api/v1/projects/{id}/recommendations",
            post(add_recommendation_handler).put(replace_recommendations_handler),
        )
        .route(
            "/api/v1/projects/{id}/recommendations/{recommendation_id}",
            axum::routing::delete(remove_recommendation_handler),
        )
        .route("/api/v1/projects/{id}/report", post(generate_report_handler))
        .route("/api/v1/files", post(upload_file_handler))
        .route("/api/v1/files/upload-url", post(upload_url_handler))
        .route("/api/v1/files/{id}", get(get_file_handler))
        .route("/api/v1/files/{id}/url", get(file_url_handler))
        .route("/api/v1/transcriptions", post(transcription_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
