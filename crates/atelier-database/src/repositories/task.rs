//! Task repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use atelier_core::error::{AppError, ErrorKind};
use atelier_core::result::AppResult;
use atelier_entity::task::{NewTask, Task};

use crate::stores::TaskStore;

/// Repository for task CRUD operations.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn find_by_project(&self, project_id: Uuid) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE project_id = $1 ORDER BY created_at",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))
    }

    /// Ownership is checked through the parent project in one query.
    async fn find_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>(
            "SELECT t.* FROM tasks t \
             JOIN projects p ON p.id = t.project_id \
             WHERE t.id = $1 AND p.owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    async fn create(&self, data: &NewTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (name, active, project_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.active)
        .bind(data.project_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }

    async fn update(&self, task: &Task) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET name = $2, active = $3 WHERE id = $1 RETURNING *",
        )
        .bind(task.id)
        .bind(&task.name)
        .bind(task.active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task", e))?
        .ok_or_else(|| AppError::not_found(format!("Task {} not found", task.id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete task", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Task {id} not found")));
        }
        Ok(())
    }
}
