//! Season handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use league_core::error::AppError;
use league_entity::season::Season;
use league_service::SeasonInput;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/seasons
pub async fn list_seasons(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Season>>>, AppError> {
    Ok(Json(ApiResponse::ok(state.season_service.list().await?)))
}

/// GET /api/seasons/{id}
pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Season>>, AppError> {
    Ok(Json(ApiResponse::ok(state.season_service.get(id).await?)))
}

/// POST /api/seasons
pub async fn create_season(
    State(state): State<AppState>,
    Json(input): Json<SeasonInput>,
) -> Result<(StatusCode, Json<ApiResponse<Season>>), AppError> {
    let season = state.season_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(season))))
}

/// PUT /api/seasons/{id}
pub async fn update_season(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<SeasonInput>,
) -> Result<Json<ApiResponse<Season>>, AppError> {
    Ok(Json(ApiResponse::ok(
        state.season_service.update(id, input).await?,
    )))
}

/// DELETE /api/seasons/{id}
pub async fn delete_season(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.season_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
