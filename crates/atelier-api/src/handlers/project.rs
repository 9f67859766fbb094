//! Project CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use atelier_core::error::AppError;
use atelier_service::project::{
    CreateProjectRequest as SvcCreateProject, UpdateProjectRequest as SvcUpdateProject,
};

use crate::dto::request::{CreateProjectRequest, UpdateProjectRequest};
use crate::error::ApiError;
use crate::extractors::RequestIdentity;
use crate::state::AppState;

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    identity: RequestIdentity,
) -> Result<Json<serde_json::Value>, ApiError> {
    let projects = state.project_service.list(&identity).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": projects }),
    ))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let project = state.project_service.get(&identity, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": project }),
    ))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let project = state
        .project_service
        .create(
            &identity,
            SvcCreateProject {
                name: req.name,
                client_id: req.client_id,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": project })),
    ))
}

/// PUT /api/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let project = state
        .project_service
        .update(
            &identity,
            id,
            SvcUpdateProject {
                name: req.name,
                owner_id: req.owner_id,
                client_id: req.client_id,
            },
        )
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": project }),
    ))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.project_service.delete(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
