//! Route definitions for the league HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the route tree. Middleware and state are attached by [`build_app`](crate::build_app).
pub fn build_router() -> Router<AppState> {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(health_routes())
        .merge(user_routes())
        .merge(admin_routes())
        .merge(team_routes())
        .merge(player_routes())
        .merge(season_routes())
        .merge(match_routes());

    Router::new().nest("/api", api_routes)
}

/// Sign-up, sign-in, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-up", post(handlers::auth::sign_up))
        .route("/auth/sign-in", post(handlers::auth::sign_in))
        .route("/auth/me", get(handlers::auth::me))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// User records
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::users::list_users))
        .route(
            "/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
}

/// Admin-only user management
fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/admin/users/{id}/role",
        put(handlers::admin::change_role),
    )
}

/// Team CRUD
fn team_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teams",
            get(handlers::teams::list_teams).post(handlers::teams::create_team),
        )
        .route(
            "/teams/{id}",
            get(handlers::teams::get_team)
                .put(handlers::teams::update_team)
                .delete(handlers::teams::delete_team),
        )
}

/// Player CRUD
fn player_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/players",
            get(handlers::players::list_players).post(handlers::players::create_player),
        )
        .route(
            "/players/{id}",
            get(handlers::players::get_player)
                .put(handlers::players::update_player)
                .delete(handlers::players::delete_player),
        )
}

/// Season CRUD
fn season_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/seasons",
            get(handlers::seasons::list_seasons).post(handlers::seasons::create_season),
        )
        .route(
            "/seasons/{id}",
            get(handlers::seasons::get_season)
                .put(handlers::seasons::update_season)
                .delete(handlers::seasons::delete_season),
        )
}

/// Match CRUD
fn match_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/matches",
            get(handlers::matches::list_matches).post(handlers::matches::create_match),
        )
        .route(
            "/matches/{id}",
            get(handlers::matches::get_match)
                .put(handlers::matches::update_match)
                .delete(handlers::matches::delete_match),
        )
}
