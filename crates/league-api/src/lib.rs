//! # league-api
//!
//! HTTP API layer for the league backend built on Axum.
//!
//! Provides the REST endpoints, the authentication and access-policy
//! middleware, CORS and logging layers, extractors, and DTOs.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
