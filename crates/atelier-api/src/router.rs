//! Route definitions for the Atelier HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Authentication runs on every request and never rejects; it resolves the
/// bearer token to an `Identity` and stashes it in request extensions for
/// the `RequestIdentity` extractor. CORS sits outside authentication so
/// preflight requests are answered without consulting the token.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(client_routes())
        .merge(project_routes())
        .merge(task_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate,
        ))
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// User directory endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::me))
        .route("/users/mail/{email}", get(handlers::user::get_user_by_email))
        .route("/users/{id}", get(handlers::user::get_user))
}

/// Client CRUD
fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(handlers::client::list_clients))
        .route("/clients", post(handlers::client::create_client))
        .route("/clients/{id}", get(handlers::client::get_client))
        .route("/clients/{id}", put(handlers::client::update_client))
        .route("/clients/{id}", delete(handlers::client::delete_client))
}

/// Project CRUD
fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(handlers::project::list_projects))
        .route("/projects", post(handlers::project::create_project))
        .route("/projects/{id}", get(handlers::project::get_project))
        .route("/projects/{id}", put(handlers::project::update_project))
        .route("/projects/{id}", delete(handlers::project::delete_project))
}

/// Task CRUD; listing and creation are addressed through the parent project
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/projects/{id}/tasks", get(handlers::task::list_tasks))
        .route("/projects/{id}/tasks", post(handlers::task::create_task))
        .route("/tasks/{id}", get(handlers::task::get_task))
        .route("/tasks/{id}", put(handlers::task::update_task))
        .route("/tasks/{id}", delete(handlers::task::delete_task))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
