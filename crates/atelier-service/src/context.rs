//! Call-scoped identity carrying the principal resolved for one request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_core::error::AppError;
use atelier_core::result::AppResult;
use atelier_entity::{Role, User};

/// The principal behind the current request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The authenticated user's ID.
    pub id: Uuid,
    /// The identity string the token named.
    pub email: String,
    /// Roles at resolution time; authorities derive 1:1 from these.
    pub roles: Vec<Role>,
}

impl CurrentUser {
    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r.is_admin())
    }
}

/// Authentication result for one request.
///
/// Built once by the authentication middleware and passed explicitly into
/// every service call. It travels in request extensions, which are dropped
/// with the request, so one request's principal cannot leak into the next.
#[derive(Debug, Clone, Default)]
pub enum Identity {
    /// No valid principal was attached to the request.
    #[default]
    Anonymous,
    /// A resolved, active principal.
    Authenticated(CurrentUser),
}

impl Identity {
    /// An identity with nobody behind it.
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    /// The current principal, if any.
    pub fn current(&self) -> Option<&CurrentUser> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    /// The current principal, or `Unauthenticated`.
    pub fn require(&self) -> AppResult<&CurrentUser> {
        self.current()
            .ok_or_else(|| AppError::unauthenticated("Authentication required"))
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self::Authenticated(CurrentUser {
            id: user.id,
            email: user.email,
            roles: user.roles,
        })
    }
}
