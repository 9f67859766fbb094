//! `RequestIdentity` extractor — reads the principal the authentication
//! middleware resolved for this request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use atelier_service::Identity;

/// Extracted request identity available to handlers.
///
/// The authentication middleware stores an [`Identity`] in request
/// extensions. A request that never passed the middleware, or whose
/// extension value is not an `Identity`, extracts as anonymous; nothing
/// else is ever coerced into a principal. Extraction cannot fail, so
/// rejecting anonymous callers stays a service-level decision.
#[derive(Debug, Clone)]
pub struct RequestIdentity(pub Identity);

impl std::ops::Deref for RequestIdentity {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequestIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<Identity>()
            .cloned()
            .unwrap_or_default();

        Ok(RequestIdentity(identity))
    }
}
