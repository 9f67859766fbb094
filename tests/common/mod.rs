//! Shared test helpers for integration tests.
//!
//! Builds the full router over in-memory stores, so tests exercise the
//! real middleware stack and handlers without a database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use atelier_api::state::AppState;
use atelier_auth::{PasswordHasher, RequestAuthenticator, TokenCodec};
use atelier_core::config::auth::AuthConfig;
use atelier_core::config::{AppConfig, DatabaseConfig};
use atelier_database::memory::MemoryStore;
use atelier_database::stores::{ClientStore, ProjectStore, TaskStore, UserStore};
use atelier_service::{AuthService, ClientService, ProjectService, TaskService, UserService};

/// Signing secret shared by the app under test and token fixtures.
pub const TEST_SECRET: &str = "2b38b193f29a1fd1b59a3b5ab3c4f8d9e0a1b2c3d4e5f60718293a4b5c6d7e8f";

/// Password used for all fixture accounts.
pub const TEST_PASSWORD: &str = "correct horse";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for direct fixture manipulation
    pub db: MemoryStore,
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores
    pub fn new() -> Self {
        let config = test_config();

        let db = MemoryStore::new();
        let users: Arc<dyn UserStore> = Arc::new(db.users());
        let clients: Arc<dyn ClientStore> = Arc::new(db.clients());
        let projects: Arc<dyn ProjectStore> = Arc::new(db.projects());
        let tasks: Arc<dyn TaskStore> = Arc::new(db.tasks());

        let codec = Arc::new(TokenCodec::new(&config.auth));
        let hasher = Arc::new(PasswordHasher::new());
        let authenticator = Arc::new(RequestAuthenticator::new(
            Arc::clone(&codec),
            Arc::clone(&users),
        ));

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

        let app_state = AppState {
            config: Arc::new(config),
            authenticator,
            auth_service,
            user_service,
            client_service,
            project_service,
            task_service,
        };

        let router = atelier_api::router::build_router(app_state);

        Self { router, db }
    }

    /// Register a user through the API and return their bearer token
    pub async fn register_and_login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "email": email,
                    "password": TEST_PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        response
            .body
            .get("data")
            .and_then(|d| d.get("token"))
            .and_then(|v| v.as_str())
            .expect("No token in registration response")
            .to_string()
    }

    /// Login and return a bearer token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("data")
            .and_then(|d| d.get("token"))
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Mint an already-expired token for the given identity, signed with
    /// the same secret the app verifies against
    pub fn expired_token(&self, email: &str) -> String {
        let codec = TokenCodec::new(&AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            jwt_ttl_seconds: -60,
            password_min_length: 8,
        });
        codec.issue(email).expect("Failed to issue expired token")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: DatabaseConfig {
            url: "postgres://unused-in-tests".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            jwt_ttl_seconds: 3600,
            password_min_length: 8,
        },
        logging: Default::default(),
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
