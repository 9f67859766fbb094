//! Registration and login — the two flows that mint tokens.

use std::sync::Arc;

use tracing::{info, warn};

use atelier_auth::jwt::TokenCodec;
use atelier_auth::password::PasswordHasher;
use atelier_core::config::auth::AuthConfig;
use atelier_core::error::AppError;
use atelier_core::result::AppResult;
use atelier_database::UserStore;
use atelier_entity::{NewUser, Role, User};

/// Handles registration and login.
pub struct AuthService {
    /// Principal directory.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token codec.
    codec: Arc<TokenCodec>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("codec", &self.codec)
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}

/// Registration data.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Login identity.
    pub email: String,
    /// Plain-text password, hashed before it is stored.
    pub password: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
}

/// Login data.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// Login identity.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Outcome of a successful register or login: the principal and a fresh
/// bearer token.
#[derive(Debug, Clone)]
pub struct TokenGrant {
    /// The authenticated principal.
    pub user: User,
    /// Signed bearer token for subsequent requests.
    pub token: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        codec: Arc<TokenCodec>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            users,
            hasher,
            codec,
            password_min_length: config.password_min_length,
        }
    }

    /// Registers a new account and logs it in.
    ///
    /// The identity must be unused; a duplicate is a `Conflict`. New
    /// accounts start active with the standard user role, and registration
    /// implies login: the returned grant carries a usable token.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<TokenGrant> {
        if !req.email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }
        if req.password.chars().count() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        // The unique index on the identity column settles concurrent
        // registrations; this lookup exists to answer the common case
        // without surfacing a storage error.
        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .users
            .create(&NewUser {
                email: req.email,
                password_hash,
                first_name: req.first_name,
                last_name: req.last_name,
                roles: vec![Role::User],
            })
            .await?;

        let token = self.codec.issue(&user.email)?;

        info!(user_id = %user.id, "User registered");

        Ok(TokenGrant { user, token })
    }

    /// Authenticates an existing account.
    ///
    /// Unknown identity, disabled account, and wrong password all fail
    /// with the same `Unauthenticated` message, so a caller cannot probe
    /// which identities exist.
    pub async fn login(&self, req: LoginRequest) -> AppResult<TokenGrant> {
        let user = self
            .users
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Invalid email or password"))?;

        if !user.active {
            warn!(user_id = %user.id, "Login attempt on disabled account");
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        let valid = self
            .hasher
            .verify_password(&req.password, &user.password_hash)?;
        if !valid {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        let token = self.codec.issue(&user.email)?;

        info!(user_id = %user.id, "User logged in");

        Ok(TokenGrant { user, token })
    }
}
