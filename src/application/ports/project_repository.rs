use async_trait::async_trait;

use crate::domain::{Project, ProjectError, ProjectId, ProjectPatch};

use super::RepositoryError;

/// An in-place edit of a stored project. Returning `Ok(false)` means nothing
/// changed and the document is not written back.
pub type ProjectEdit = Box<dyn FnOnce(&mut Project) -> Result<bool, ProjectError> + Send>;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: &Project) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError>;

    /// All projects, newest first.
    async fn list(&self) -> Result<Vec<Project>, RepositoryError>;

    /// Runs `edit` against the stored document as one read-modify-write, so
    /// concurrent edits of the same project never overwrite each other.
    async fn update(&self, id: ProjectId, edit: ProjectEdit) -> Result<Project, RepositoryError>;

    /// Merges `patch` into the stored document and returns the result.
    async fn patch(&self, id: ProjectId, patch: ProjectPatch) -> Result<Project, RepositoryError> {
        self.update(
            id,
            Box::new(move |project: &mut Project| patch.apply(project).map(|()| true)),
        )
        .await
    }
}
