use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ProjectEdit, ProjectRepository, RepositoryError};
use crate::domain::{Project, ProjectId};

/// Process-local document store; insertion order doubles as creation order.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: &Project) -> Result<(), RepositoryError> {
        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "project {} already exists",
                project.id
            )));
        }
        projects.push(project.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        let projects = self.projects.read().await;
        let mut listed: Vec<Project> = projects.iter().rev().cloned().collect();
        // Stable sort keeps reverse insertion order for equal timestamps.
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn update(&self, id: ProjectId, edit: ProjectEdit) -> Result<Project, RepositoryError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        // Edit a copy so a rejected edit leaves the stored document intact.
        let mut edited = project.clone();
        if edit(&mut edited)? {
            *project = edited.clone();
        }
        Ok(edited)
    }
}
