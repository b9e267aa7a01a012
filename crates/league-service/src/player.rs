//! Player management.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use league_core::error::AppError;
use league_database::repositories::{PlayerRepository, TeamRepository};
use league_entity::player::{NewPlayer, Player};

use crate::team::team_not_found;

/// Request body for creating or replacing a player.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInput {
    /// Team the player belongs to, if any.
    pub team_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
}

/// Handles player CRUD.
#[derive(Debug, Clone)]
pub struct PlayerService {
    player_repo: Arc<PlayerRepository>,
    team_repo: Arc<TeamRepository>,
}

impl PlayerService {
    /// Creates a new player service.
    pub fn new(player_repo: Arc<PlayerRepository>, team_repo: Arc<TeamRepository>) -> Self {
        Self {
            player_repo,
            team_repo,
        }
    }

    /// Lists players, optionally for one team.
    pub async fn list(&self, team_id: Option<i64>) -> Result<Vec<Player>, AppError> {
        self.player_repo.find_all(team_id).await
    }

    /// Gets one player.
    pub async fn get(&self, id: i64) -> Result<Player, AppError> {
        self.player_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| player_not_found(id))
    }

    /// Creates a player.
    pub async fn create(&self, input: PlayerInput) -> Result<Player, AppError> {
        let data = self.resolve(input).await?;
        let player = self.player_repo.create(&data).await?;
        info!(player_id = player.id, team_id = ?player.team_id, "Player created");
        Ok(player)
    }

    /// Replaces a player.
    pub async fn update(&self, id: i64, input: PlayerInput) -> Result<Player, AppError> {
        let data = self.resolve(input).await?;
        self.player_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| player_not_found(id))
    }

    /// Deletes a player.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.player_repo.delete(id).await? {
            return Err(player_not_found(id));
        }
        info!(player_id = id, "Player deleted");
        Ok(())
    }

    async fn resolve(&self, input: PlayerInput) -> Result<NewPlayer, AppError> {
        let data = normalize(input)?;
        if let Some(team_id) = data.team_id {
            if self.team_repo.find_by_id(team_id).await?.is_none() {
                return Err(team_not_found(team_id));
            }
        }
        Ok(data)
    }
}

fn player_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Player not found with id: {id}"))
}

fn normalize(input: PlayerInput) -> Result<NewPlayer, AppError> {
    let first_name = input.first_name.trim();
    let last_name = input.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(AppError::validation("Player first and last name are required"));
    }
    for (field, value) in [("age", input.age), ("height", input.height), ("weight", input.weight)] {
        if value.is_some_and(|v| v < 0) {
            return Err(AppError::validation(format!("Player {field} must not be negative")));
        }
    }
    Ok(NewPlayer {
        team_id: input.team_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        position: input.position.filter(|p| !p.trim().is_empty()),
        age: input.age,
        height: input.height,
        weight: input.weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PlayerInput {
        PlayerInput {
            team_id: Some(1),
            first_name: " Michael ".to_string(),
            last_name: "Jordan".to_string(),
            position: Some("SG".to_string()),
            age: Some(23),
            height: Some(198),
            weight: Some(98),
        }
    }

    #[test]
    fn test_normalize_keeps_fields() {
        let player = normalize(input()).unwrap();
        assert_eq!(player.first_name, "Michael");
        assert_eq!(player.position.as_deref(), Some("SG"));
        assert_eq!(player.team_id, Some(1));
    }

    #[test]
    fn test_missing_name_and_negative_numbers_are_rejected() {
        let mut blank = input();
        blank.last_name = String::new();
        assert!(normalize(blank).is_err());

        let mut negative = input();
        negative.weight = Some(-1);
        assert!(normalize(negative).is_err());
    }
}
