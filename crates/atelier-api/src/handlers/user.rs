//! User directory handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::RequestIdentity;
use crate::state::AppState;

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    identity: RequestIdentity,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.me(&identity).await?;

    Ok(Json(ApiResponse::ok(UserResponse {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        active: user.active,
        roles: user.roles,
        created_at: user.created_at,
    })))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get(&identity, id).await?;

    Ok(Json(ApiResponse::ok(UserResponse {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        active: user.active,
        roles: user.roles,
        created_at: user.created_at,
    })))
}

/// GET /api/users/mail/{email}
pub async fn get_user_by_email(
    State(state): State<AppState>,
    identity: RequestIdentity,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_by_email(&identity, &email).await?;

    Ok(Json(ApiResponse::ok(UserResponse {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        active: user.active,
        roles: user.roles,
        created_at: user.created_at,
    })))
}
