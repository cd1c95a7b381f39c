use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BlobId, Observation, ObservationPatch, ProjectId, ProjectTemplate, Recommendation};

/// One inspection in progress. The document is the sole owner of its
/// observations and recommendations; both sequences keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub original_template_id: String,
    pub original_template_title: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub inspection_date: Option<String>,
    #[serde(default)]
    pub site_address: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub inspector_name: Option<String>,
    #[serde(default)]
    pub cover_photo: Option<BlobId>,
    #[serde(default)]
    pub site_description_text: Option<String>,
    #[serde(default)]
    pub scope_of_evaluation_text: Option<String>,
    #[serde(default)]
    pub conclusions_text: Option<String>,
    #[serde(default)]
    pub observations: Vec<Observation>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub generated_report_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("observation id already present: {0}")]
    DuplicateObservation(String),
    #[error("recommendation id already present: {0}")]
    DuplicateRecommendation(String),
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        original_template_id: impl Into<String>,
        original_template_title: impl Into<String>,
        user_id: Option<String>,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            original_template_id: original_template_id.into(),
            original_template_title: original_template_title.into(),
            user_id,
            project_type: None,
            inspection_date: None,
            site_address: None,
            site_name: None,
            client_name: None,
            inspector_name: None,
            cover_photo: None,
            site_description_text: None,
            scope_of_evaluation_text: None,
            conclusions_text: None,
            observations: Vec::new(),
            recommendations: Vec::new(),
            generated_report_url: None,
            created_at: Utc::now(),
        }
    }

    pub fn from_template(
        template: &ProjectTemplate,
        name: Option<String>,
        user_id: Option<String>,
    ) -> Self {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Project from {}", template.title));
        Self::new(name, template.id, template.title, user_id)
    }

    pub fn add_observation(&mut self, observation: Observation) -> Result<(), ProjectError> {
        if self.observations.iter().any(|o| o.id == observation.id) {
            return Err(ProjectError::DuplicateObservation(observation.id));
        }
        self.observations.push(observation);
        Ok(())
    }

    /// Returns `false` when no observation carries `id`.
    pub fn update_observation(&mut self, id: &str, patch: ObservationPatch) -> bool {
        match self.observations.iter_mut().find(|o| o.id == id) {
            Some(observation) => {
                patch.apply(observation);
                true
            }
            None => false,
        }
    }

    /// Removing an unknown id is a no-op and returns `false`.
    pub fn remove_observation(&mut self, id: &str) -> bool {
        let before = self.observations.len();
        self.observations.retain(|o| o.id != id);
        self.observations.len() != before
    }

    pub fn add_recommendation(
        &mut self,
        recommendation: Recommendation,
    ) -> Result<(), ProjectError> {
        if self.recommendations.iter().any(|r| r.id == recommendation.id) {
            return Err(ProjectError::DuplicateRecommendation(recommendation.id));
        }
        self.recommendations.push(recommendation);
        Ok(())
    }

    pub fn remove_recommendation(&mut self, id: &str) -> bool {
        let before = self.recommendations.len();
        self.recommendations.retain(|r| r.id != id);
        self.recommendations.len() != before
    }
}
