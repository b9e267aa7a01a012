//! Match repository implementation.

use sqlx::PgPool;

use league_core::result::AppResult;
use league_entity::matches::{Match, NewMatch};

use super::db_error;

/// Repository for match CRUD.
#[derive(Debug, Clone)]
pub struct MatchRepository {
    pool: PgPool,
}

impl MatchRepository {
    /// Create a new match repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List matches in date order, optionally restricted to one season.
    pub async fn find_all(&self, season_id: Option<i64>) -> AppResult<Vec<Match>> {
        sqlx::query_as::<_, Match>(
            "SELECT * FROM matches WHERE ($1::BIGINT IS NULL OR season_id = $1) \
             ORDER BY date, id",
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list matches"))
    }

    /// Find a match by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Match>> {
        sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find match"))
    }

    /// Insert a new match.
    pub async fn create(&self, data: &NewMatch) -> AppResult<Match> {
        sqlx::query_as::<_, Match>(
            "INSERT INTO matches \
                (season_id, date, home_team_id, away_team_id, home_team_score, away_team_score) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.season_id)
        .bind(data.date)
        .bind(data.home_team_id)
        .bind(data.away_team_id)
        .bind(data.home_team_score)
        .bind(data.away_team_score)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create match"))
    }

    /// Replace a match. Returns `None` if it does not exist.
    pub async fn update(&self, id: i64, data: &NewMatch) -> AppResult<Option<Match>> {
        sqlx::query_as::<_, Match>(
            "UPDATE matches SET season_id = $2, date = $3, home_team_id = $4, away_team_id = $5, \
                                home_team_score = $6, away_team_score = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.season_id)
        .bind(data.date)
        .bind(data.home_team_id)
        .bind(data.away_team_id)
        .bind(data.home_team_score)
        .bind(data.away_team_score)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update match"))
    }

    /// Delete a match. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete match"))?;
        Ok(result.rows_affected() > 0)
    }
}
