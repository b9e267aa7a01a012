//! Player handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use league_core::error::AppError;
use league_entity::player::Player;
use league_service::PlayerInput;

use crate::dto::request::PlayerFilter;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/players?team_id=
pub async fn list_players(
    State(state): State<AppState>,
    Query(filter): Query<PlayerFilter>,
) -> Result<Json<ApiResponse<Vec<Player>>>, AppError> {
    let players = state.player_service.list(filter.team_id).await?;
    Ok(Json(ApiResponse::ok(players)))
}

/// GET /api/players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Player>>, AppError> {
    Ok(Json(ApiResponse::ok(state.player_service.get(id).await?)))
}

/// POST /api/players
pub async fn create_player(
    State(state): State<AppState>,
    Json(input): Json<PlayerInput>,
) -> Result<(StatusCode, Json<ApiResponse<Player>>), AppError> {
    let player = state.player_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(player))))
}

/// PUT /api/players/{id}
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<PlayerInput>,
) -> Result<Json<ApiResponse<Player>>, AppError> {
    Ok(Json(ApiResponse::ok(
        state.player_service.update(id, input).await?,
    )))
}

/// DELETE /api/players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.player_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
