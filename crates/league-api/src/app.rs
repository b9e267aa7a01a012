//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::{auth, logging, rbac};
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Layers, outermost first: CORS, request logging, tracing, compression,
/// bearer authentication, access policy.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router()
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rbac::authorize,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::authenticate,
        ))
        .layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(logging::request_logging))
        .layer(cors)
        .with_state(state)
}
