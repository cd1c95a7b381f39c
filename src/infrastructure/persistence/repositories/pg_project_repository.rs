use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{ProjectEdit, ProjectRepository, RepositoryError};
use crate::domain::{Project, ProjectId};

/// Projects stored as JSONB documents, one row per project.
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::ConstraintViolation(db.message().to_string())
        }
        _ => RepositoryError::QueryFailed(e.to_string()),
    }
}

fn decode(row: &sqlx::postgres::PgRow) -> Result<Project, RepositoryError> {
    row.try_get::<Json<Project>, _>("document")
        .map(|Json(project)| project)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    #[instrument(skip(self, project), fields(project_id = %project.id))]
    async fn create(&self, project: &Project) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO projects (id, document, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            "#,
        )
        .bind(project.id.as_uuid())
        .bind(Json(project))
        .bind(project.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(project_id = %id))]
    async fn get_by_id(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError> {
        let row = sqlx::query("SELECT document FROM projects WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(decode).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        let rows = sqlx::query("SELECT document FROM projects ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(decode).collect()
    }

    #[instrument(skip(self, edit), fields(project_id = %id))]
    async fn update(&self, id: ProjectId, edit: ProjectEdit) -> Result<Project, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(query_failed)?;

        let row = sqlx::query("SELECT document FROM projects WHERE id = $1 FOR UPDATE")
            .bind(id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(query_failed)?
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        let mut project = decode(&row)?;
        if !edit(&mut project)? {
            tx.rollback().await.map_err(query_failed)?;
            return Ok(project);
        }

        sqlx::query("UPDATE projects SET document = $1, updated_at = $2 WHERE id = $3")
            .bind(Json(&project))
            .bind(Utc::now())
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(query_failed)?;

        tx.commit().await.map_err(query_failed)?;

        Ok(project)
    }
}
