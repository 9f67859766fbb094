//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use atelier_core::error::AppError;
use atelier_service::auth::{
    LoginRequest as SvcLogin, RegisterRequest as SvcRegister,
};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TokenResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let grant = state
        .auth_service
        .register(SvcRegister {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
        })
        .await?;

    let user = UserResponse {
        id: grant.user.id,
        email: grant.user.email,
        first_name: grant.user.first_name,
        last_name: grant.user.last_name,
        active: grant.user.active,
        roles: grant.user.roles,
        created_at: grant.user.created_at,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(TokenResponse {
            token: grant.token,
            token_type: "Bearer".to_string(),
            user,
        })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let grant = state
        .auth_service
        .login(SvcLogin {
            email: req.email,
            password: req.password,
        })
        .await?;

    let user = UserResponse {
        id: grant.user.id,
        email: grant.user.email,
        first_name: grant.user.first_name,
        last_name: grant.user.last_name,
        active: grant.user.active,
        roles: grant.user.roles,
        created_at: grant.user.created_at,
    };

    Ok(Json(ApiResponse::ok(TokenResponse {
        token: grant.token,
        token_type: "Bearer".to_string(),
        user,
    })))
}
