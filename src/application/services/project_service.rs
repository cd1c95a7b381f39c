use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError, ProjectRepository, RepositoryError};
use crate::domain::{
    BlobId, Observation, ObservationPatch, Project, ProjectError, ProjectId, ProjectPatch,
    Recommendation, ResolvedProject, find_template,
};

/// Document-store operations on projects. Every mutation runs as a single
/// repository update, so nested-array edits on one project serialize.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
    blob_store: Arc<dyn BlobStore>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self {
            repository,
            blob_store,
        }
    }

    #[tracing::instrument(skip(self, name, user_id))]
    pub async fn create_from_template(
        &self,
        template_id: &str,
        name: Option<String>,
        user_id: Option<String>,
    ) -> Result<Project, ProjectServiceError> {
        let template = find_template(template_id)
            .ok_or_else(|| ProjectServiceError::UnknownTemplate(template_id.to_string()))?;

        let project = Project::from_template(template, name, user_id);
        self.repository.create(&project).await?;

        tracing::info!(
            project_id = %project.id,
            template = template.title,
            "Project created from template"
        );

        Ok(project)
    }

    pub async fn get_project(&self, id: ProjectId) -> Result<Project, ProjectServiceError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))
    }

    /// Loads a project and resolves its cover photo and observation images to
    /// URLs. Blobs that no longer exist resolve to nothing.
    pub async fn get_resolved_project(
        &self,
        id: ProjectId,
    ) -> Result<ResolvedProject, ProjectServiceError> {
        let project = self.get_project(id).await?;

        let cover_photo_url = match &project.cover_photo {
            Some(blob) => self.resolve_url(blob).await?,
            None => None,
        };

        let mut observation_image_urls = HashMap::new();
        for observation in &project.observations {
            if let Some(blob) = &observation.image {
                if let Some(url) = self.resolve_url(blob).await? {
                    observation_image_urls.insert(observation.id.clone(), url);
                }
            }
        }

        Ok(ResolvedProject {
            project,
            cover_photo_url,
            observation_image_urls,
        })
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ProjectServiceError> {
        Ok(self.repository.list().await?)
    }

    pub async fn update_project(
        &self,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> Result<Project, ProjectServiceError> {
        if patch.is_empty() {
            return self.get_project(id).await;
        }
        self.edit(id, move |project| patch.apply(project).map(|()| true))
            .await
    }

    pub async fn add_observation(
        &self,
        id: ProjectId,
        observation: Observation,
    ) -> Result<Project, ProjectServiceError> {
        self.edit(id, move |project| project.add_observation(observation).map(|()| true))
            .await
    }

    pub async fn update_observation(
        &self,
        id: ProjectId,
        observation_id: &str,
        update: ObservationPatch,
    ) -> Result<Project, ProjectServiceError> {
        let observation_id = observation_id.to_string();
        self.edit(id, move |project| {
            let found = project.update_observation(&observation_id, update);
            if !found {
                tracing::debug!(%observation_id, "Observation not present, nothing to update");
            }
            Ok(found)
        })
        .await
    }

    pub async fn remove_observation(
        &self,
        id: ProjectId,
        observation_id: &str,
    ) -> Result<Project, ProjectServiceError> {
        let observation_id = observation_id.to_string();
        self.edit(id, move |project| {
            let found = project.remove_observation(&observation_id);
            if !found {
                tracing::debug!(%observation_id, "Observation not present, nothing to remove");
            }
            Ok(found)
        })
        .await
    }

    pub async fn replace_recommendations(
        &self,
        id: ProjectId,
        recommendations: Vec<Recommendation>,
    ) -> Result<Project, ProjectServiceError> {
        let patch = ProjectPatch::recommendations(recommendations);
        self.edit(id, move |project| patch.apply(project).map(|()| true))
            .await
    }

    pub async fn add_recommendation(
        &self,
        id: ProjectId,
        recommendation: Recommendation,
    ) -> Result<Project, ProjectServiceError> {
        self.edit(id, move |project| {
            project.add_recommendation(recommendation).map(|()| true)
        })
        .await
    }

    pub async fn remove_recommendation(
        &self,
        id: ProjectId,
        recommendation_id: &str,
    ) -> Result<Project, ProjectServiceError> {
        let recommendation_id = recommendation_id.to_string();
        self.edit(id, move |project| Ok(project.remove_recommendation(&recommendation_id)))
            .await
    }

    async fn edit<F>(&self, id: ProjectId, edit: F) -> Result<Project, ProjectServiceError>
    where
        F: FnOnce(&mut Project) -> Result<bool, ProjectError> + Send + 'static,
    {
        self.repository
            .update(id, Box::new(edit))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ProjectServiceError::NotFound(id),
                RepositoryError::Rejected(e) => ProjectServiceError::Invalid(e),
                other => ProjectServiceError::Repository(other),
            })
    }

    async fn resolve_url(&self, blob: &BlobId) -> Result<Option<String>, ProjectServiceError> {
        let url = self.blob_store.get_url(blob).await?;
        if url.is_none() {
            tracing::warn!(blob_id = %blob, "Referenced blob is missing");
        }
        Ok(url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectServiceError {
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error(transparent)]
    Invalid(#[from] ProjectError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("blob store: {0}")]
    BlobStore(#[from] BlobStoreError),
}
