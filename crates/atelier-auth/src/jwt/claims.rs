//! JWT claims structure embedded in every bearer token.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims payload. The subject is the principal's login identity (email),
/// not a surrogate key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the principal's identity.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Checks whether this token has expired.
    ///
    /// The bound is exclusive: a token inspected at exactly its expiry
    /// instant is already expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
