//! Project repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use atelier_core::error::{AppError, ErrorKind};
use atelier_core::result::AppResult;
use atelier_entity::project::{NewProject, Project};

use crate::stores::ProjectStore;

/// Repository for project CRUD operations.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE owner_id = $1 ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    async fn create(&self, data: &NewProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (name, owner_id, client_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.owner_id)
        .bind(data.client_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    async fn update(&self, project: &Project) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = $2, owner_id = $3, client_id = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(project.owner_id)
        .bind(project.client_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update project", e))?
        .ok_or_else(|| AppError::not_found(format!("Project {} not found", project.id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete project", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Project {id} not found")));
        }
        Ok(())
    }
}
