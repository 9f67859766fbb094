//! Client CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use atelier_core::error::AppError;
use atelier_service::client::{
    CreateClientRequest as SvcCreateClient, UpdateClientRequest as SvcUpdateClient,
};

use crate::dto::request::{CreateClientRequest, UpdateClientRequest};
use crate::error::ApiError;
use crate::extractors::RequestIdentity;
use crate::state::AppState;

/// GET /api/clients
pub async fn list_clients(
    State(state): State<AppState>,
    identity: RequestIdentity,
) -> Result<Json<serde_json::Value>, ApiError> {
    let clients = state.client_service.list(&identity).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": clients }),
    ))
}

/// GET /api/clients/{id}
pub async fn get_client(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let client = state.client_service.get(&identity, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": client })))
}

/// POST /api/clients
pub async fn create_client(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Json(req): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let client = state
        .client_service
        .create(
            &identity,
            SvcCreateClient {
                name: req.name,
                email: req.email,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": client })),
    ))
}

/// PUT /api/clients/{id}
pub async fn update_client(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateClientRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let client = state
        .client_service
        .update(
            &identity,
            id,
            SvcUpdateClient {
                name: req.name,
                email: req.email,
                owner_id: req.owner_id,
            },
        )
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": client })))
}

/// DELETE /api/clients/{id}
pub async fn delete_client(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.client_service.delete(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
