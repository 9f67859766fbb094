//! Task CRUD handlers.
//!
//! Listing and creation are addressed through the parent project; single-task
//! routes carry the task id and resolve the project on the service side.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use atelier_core::error::AppError;
use atelier_service::task::{
    CreateTaskRequest as SvcCreateTask, UpdateTaskRequest as SvcUpdateTask,
};

use crate::dto::request::{CreateTaskRequest, UpdateTaskRequest};
use crate::error::ApiError;
use crate::extractors::RequestIdentity;
use crate::state::AppState;

/// GET /api/projects/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(project_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let tasks = state.task_service.list(&identity, project_id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": tasks })))
}

/// POST /api/projects/{id}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let task = state
        .task_service
        .create(
            &identity,
            project_id,
            SvcCreateTask {
                name: req.name,
                active: req.active,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": task })),
    ))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let task = state.task_service.get(&identity, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": task })))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let task = state
        .task_service
        .update(
            &identity,
            id,
            SvcUpdateTask {
                name: req.name,
                active: req.active,
            },
        )
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": task })))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.task_service.delete(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
