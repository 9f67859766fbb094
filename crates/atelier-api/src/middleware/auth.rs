//! Request authentication middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use atelier_service::Identity;

use crate::state::AppState;

/// Resolves the `Authorization` header into an [`Identity`] and stores it
/// in request extensions for the handlers behind it.
///
/// This middleware never rejects. Requests with no token, a bad token, or
/// a disabled account proceed as anonymous; guarded services answer with
/// `Unauthenticated` when it matters.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let identity = match state.authenticator.authenticate(header.as_deref()).await {
        Some(user) => Identity::from(user),
        None => Identity::anonymous(),
    };

    request.extensions_mut().insert(identity);
    next.run(request).await
}
