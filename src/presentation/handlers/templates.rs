use axum::Json;
use axum::extract::Query;
use serde::Deserialize;

use crate::domain::{ProjectTemplate, search_templates};

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    #[serde(default)]
    pub q: Option<String>,
}

pub async fn list_templates_handler(
    Query(query): Query<TemplateQuery>,
) -> Json<Vec<&'static ProjectTemplate>> {
    Json(search_templates(query.q.as_deref().unwrap_or_default()))
}
