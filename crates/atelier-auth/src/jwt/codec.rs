//! Token issuing and validation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use atelier_core::config::auth::AuthConfig;
use atelier_core::error::{AppError, ErrorKind};
use atelier_core::result::AppResult;

use super::claims::Claims;

/// Issues and validates HS512-signed bearer tokens.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Token lifetime in seconds. May be negative, in which case every
    /// issued token is born expired.
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = 0;
        // Expiry is compared explicitly in decode() so that a token
        // inspected at exactly its expiry instant is already rejected.
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_seconds: config.jwt_ttl_seconds,
        }
    }

    /// Issues a signed token for the given identity.
    pub fn issue(&self, identity: &str) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity.to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to encode token", e))
    }

    /// Checks whether a token is well-formed, genuinely signed, and not
    /// expired. Malformed, forged, and expired tokens are indistinguishable
    /// here; callers that need the reason go through [`Self::subject_of`].
    pub fn verify(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Extracts the subject identity from a token.
    ///
    /// Validates the token from scratch; a previous [`Self::verify`] call
    /// is never trusted.
    pub fn subject_of(&self, token: &str) -> AppResult<String> {
        Ok(self.decode(token)?.sub)
    }

    fn decode(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::with_source(ErrorKind::Token, "Invalid token", e))?;

        let claims = data.claims;
        if claims.is_expired() {
            return Err(AppError::token("Token has expired"));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
    const OTHER_SECRET: &str = "fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210";

    fn codec(secret: &str, ttl_seconds: i64) -> TokenCodec {
        TokenCodec::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_ttl_seconds: ttl_seconds,
            password_min_length: 8,
        })
    }

    #[test]
    fn test_round_trip_preserves_subject() {
        let codec = codec(SECRET, 3600);
        let token = codec.issue("user@example.com").unwrap();

        assert!(codec.verify(&token));
        assert_eq!(codec.subject_of(&token).unwrap(), "user@example.com");
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let codec = codec(SECRET, 3600);

        assert!(!codec.verify("not.a.jwt"));
        assert!(!codec.verify(""));

        let err = codec.subject_of("not.a.jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Token);
    }

    #[test]
    fn test_foreign_key_signature_is_rejected() {
        let ours = codec(SECRET, 3600);
        let theirs = codec(OTHER_SECRET, 3600);

        let token = theirs.issue("user@example.com").unwrap();
        assert!(!ours.verify(&token));
        assert!(ours.subject_of(&token).is_err());
    }

    #[test]
    fn test_spliced_payload_is_rejected() {
        let codec = codec(SECRET, 3600);
        let a = codec.issue("alice@example.com").unwrap();
        let b = codec.issue("bob@example.com").unwrap();

        let a_parts: Vec<&str> = a.split('.').collect();
        let b_parts: Vec<&str> = b.split('.').collect();
        let spliced = format!("{}.{}.{}", a_parts[0], a_parts[1], b_parts[2]);

        assert!(!codec.verify(&spliced));
    }

    #[test]
    fn test_negative_ttl_issues_expired_tokens() {
        let codec = codec(SECRET, -60);
        let token = codec.issue("user@example.com").unwrap();

        assert!(!codec.verify(&token));
        let err = codec.subject_of(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Token);
    }

    #[test]
    fn test_expiry_tie_is_expired() {
        // Zero TTL makes exp == iat; the exclusive bound rejects the token
        // from the instant it is issued.
        let codec = codec(SECRET, 0);
        let token = codec.issue("user@example.com").unwrap();

        assert!(!codec.verify(&token));
    }

    #[test]
    fn test_verify_does_not_vouch_for_subject_of() {
        let expired = codec(SECRET, -60);
        let token = expired.issue("user@example.com").unwrap();

        // subject_of re-validates on its own and must refuse the token.
        assert!(expired.subject_of(&token).is_err());
    }
}
