//! Request authentication: bearer header in, resolved principal out.

use std::sync::Arc;

use tracing::{debug, warn};

use atelier_database::UserStore;
use atelier_entity::User;

use crate::jwt::TokenCodec;

/// Resolves `Authorization` headers into principals.
///
/// This gate never rejects a request. Anything short of a well-formed,
/// genuinely signed, unexpired token naming an existing active account
/// resolves to anonymous, and the request proceeds; services decide later
/// what anonymous callers may do.
pub struct RequestAuthenticator {
    /// Token codec for verification and subject extraction.
    codec: Arc<TokenCodec>,
    /// Principal directory.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestAuthenticator")
            .field("codec", &self.codec)
            .finish()
    }
}

impl RequestAuthenticator {
    /// Creates a new authenticator.
    pub fn new(codec: Arc<TokenCodec>, users: Arc<dyn UserStore>) -> Self {
        Self { codec, users }
    }

    /// Authenticates a request from its `Authorization` header value.
    ///
    /// Returns the resolved principal, or `None` for anything else: no
    /// header, a non-bearer scheme, an invalid or expired token, a subject
    /// with no directory entry, or a disabled account.
    pub async fn authenticate(&self, authorization: Option<&str>) -> Option<User> {
        let header = authorization?;
        let token = header.strip_prefix("Bearer ")?;

        if !self.codec.verify(token) {
            debug!("Rejected bearer token");
            return None;
        }

        // subject_of validates on its own; verify above only short-circuits
        // the common garbage cases before we touch the directory.
        let identity = self.codec.subject_of(token).ok()?;

        let user = match self.users.find_by_email(&identity).await {
            Ok(found) => found?,
            Err(e) => {
                warn!(error = %e, "Principal lookup failed during authentication");
                return None;
            }
        };

        if !user.active {
            debug!(user_id = %user.id, "Disabled account presented a valid token");
            return None;
        }

        Some(user)
    }
}
