//! Atelier Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use atelier_auth::{PasswordHasher, RequestAuthenticator, TokenCodec};
use atelier_core::config::AppConfig;
use atelier_core::error::AppError;
use atelier_database::connection::DatabasePool;
use atelier_database::repositories::{
    ClientRepository, ProjectRepository, TaskRepository, UserRepository,
};
use atelier_database::stores::{ClientStore, ProjectStore, TaskStore, UserStore};
use atelier_service::{
    AuthService, ClientService, ProjectService, TaskService, UserService,
};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("ATELIER_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Atelier v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    atelier_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db.pool().clone()));
    let clients: Arc<dyn ClientStore> = Arc::new(ClientRepository::new(db.pool().clone()));
    let projects: Arc<dyn ProjectStore> = Arc::new(ProjectRepository::new(db.pool().clone()));
    let tasks: Arc<dyn TaskStore> = Arc::new(TaskRepository::new(db.pool().clone()));

    // ── Step 3: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let codec = Arc::new(TokenCodec::new(&config.auth));
    let hasher = Arc::new(PasswordHasher::new());
    let authenticator = Arc::new(RequestAuthenticator::new(
        Arc::clone(&codec),
        Arc::clone(&users),
    ));

    // ── Step 4: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&users),
        Arc::clone(&hasher),
        Arc::clone(&codec),
        &config.auth,
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&users)));
    let client_service = Arc::new(ClientService::new(
        Arc::clone(&clients),
        Arc::clone(&users),
    ));
    let project_service = Arc::new(ProjectService::new(
        Arc::clone(&projects),
        Arc::clone(&clients),
        Arc::clone(&users),
    ));
    let task_service = Arc::new(TaskService::new(
        Arc::clone(&tasks),
        Arc::clone(&projects),
    ));
    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let app_state = atelier_api::state::AppState {
        config: Arc::new(config.clone()),
        authenticator,
        auth_service,
        user_service,
        client_service,
        project_service,
        task_service,
    };

    let app = atelier_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Atelier server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Atelier server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
