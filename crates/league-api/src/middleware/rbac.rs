//! Route-level access policy enforcement.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use league_auth::Principal;
use league_core::error::AppError;

use crate::state::AppState;

/// Rejects the request with 401 or 403 when the access policy denies it.
pub async fn authorize(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    state.access_policy.check(
        request.method().as_str(),
        request.uri().path(),
        request.extensions().get::<Principal>(),
    )?;

    Ok(next.run(request).await)
}
