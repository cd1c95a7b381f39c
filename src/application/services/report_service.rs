use std::sync::Arc;

use crate::application::ports::{RenderError, ReportRenderer};
use crate::domain::ProjectId;

use super::{
    ProjectService, ProjectServiceError, PublishError, PublishedReport, ReportAssembler,
    ReportPublisher,
};

/// Assemble, render, publish; each step starts only after the previous one
/// has completed.
pub struct ReportService {
    projects: Arc<ProjectService>,
    assembler: ReportAssembler,
    renderer: Arc<dyn ReportRenderer>,
    publisher: ReportPublisher,
}

impl ReportService {
    pub fn new(
        projects: Arc<ProjectService>,
        assembler: ReportAssembler,
        renderer: Arc<dyn ReportRenderer>,
        publisher: ReportPublisher,
    ) -> Self {
        Self {
            projects,
            assembler,
            renderer,
            publisher,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn generate(&self, project_id: ProjectId) -> Result<PublishedReport, ReportError> {
        let resolved = self
            .projects
            .get_resolved_project(project_id)
            .await
            .map_err(|e| match e {
                ProjectServiceError::NotFound(id) => ReportError::ProjectNotFound(id),
                other => ReportError::Load(other),
            })?;

        let report = self.assembler.assemble(&resolved);
        tracing::debug!(
            sections = report.sections.len(),
            "Report data assembled"
        );

        let html = self.renderer.render(&report).map_err(|e| {
            tracing::error!(error = %e, "Report rendering failed");
            ReportError::Render(e)
        })?;

        Ok(self.publisher.publish(&resolved.project, html).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    #[error("loading project: {0}")]
    Load(ProjectServiceError),
    #[error("render: {0}")]
    Render(RenderError),
    #[error("publish: {0}")]
    Publish(#[from] PublishError),
}
