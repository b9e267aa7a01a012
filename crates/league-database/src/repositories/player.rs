//! Player repository implementation.

use sqlx::PgPool;

use league_core::result::AppResult;
use league_entity::player::{NewPlayer, Player};

use super::db_error;

/// Repository for player CRUD.
#[derive(Debug, Clone)]
pub struct PlayerRepository {
    pool: PgPool,
}

impl PlayerRepository {
    /// Create a new player repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List players, optionally restricted to one team.
    pub async fn find_all(&self, team_id: Option<i64>) -> AppResult<Vec<Player>> {
        sqlx::query_as::<_, Player>(
            "SELECT * FROM players WHERE ($1::BIGINT IS NULL OR team_id = $1) \
             ORDER BY last_name, first_name",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list players"))
    }

    /// Find a player by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Player>> {
        sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find player"))
    }

    /// Insert a new player.
    pub async fn create(&self, data: &NewPlayer) -> AppResult<Player> {
        sqlx::query_as::<_, Player>(
            "INSERT INTO players (team_id, first_name, last_name, position, age, height, weight) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.team_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.position)
        .bind(data.age)
        .bind(data.height)
        .bind(data.weight)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create player"))
    }

    /// Replace a player. Returns `None` if it does not exist.
    pub async fn update(&self, id: i64, data: &NewPlayer) -> AppResult<Option<Player>> {
        sqlx::query_as::<_, Player>(
            "UPDATE players SET team_id = $2, first_name = $3, last_name = $4, position = $5, \
                                age = $6, height = $7, weight = $8 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.team_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.position)
        .bind(data.age)
        .bind(data.height)
        .bind(data.weight)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update player"))
    }

    /// Delete a player. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete player"))?;
        Ok(result.rows_affected() > 0)
    }
}
