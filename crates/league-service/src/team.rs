//! Team management.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use league_core::error::AppError;
use league_database::repositories::TeamRepository;
use league_entity::team::{NewTeam, Team};

/// Request body for creating or replacing a team.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamInput {
    /// Team name, unique ignoring case.
    pub name: String,
}

/// Handles team CRUD.
#[derive(Debug, Clone)]
pub struct TeamService {
    team_repo: Arc<TeamRepository>,
}

impl TeamService {
    /// Creates a new team service.
    pub fn new(team_repo: Arc<TeamRepository>) -> Self {
        Self { team_repo }
    }

    /// Lists all teams.
    pub async fn list(&self) -> Result<Vec<Team>, AppError> {
        self.team_repo.find_all().await
    }

    /// Gets one team.
    pub async fn get(&self, id: i64) -> Result<Team, AppError> {
        self.team_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    /// Creates a team.
    pub async fn create(&self, input: TeamInput) -> Result<Team, AppError> {
        let data = normalize(input)?;
        if self.team_repo.exists_by_name(&data.name, None).await? {
            return Err(duplicate(&data.name));
        }
        let team = self.team_repo.create(&data).await?;
        info!(team_id = team.id, name = %team.name, "Team created");
        Ok(team)
    }

    /// Renames a team.
    pub async fn update(&self, id: i64, input: TeamInput) -> Result<Team, AppError> {
        let data = normalize(input)?;
        if self.team_repo.exists_by_name(&data.name, Some(id)).await? {
            return Err(duplicate(&data.name));
        }
        self.team_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    /// Deletes a team.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.team_repo.delete(id).await? {
            return Err(team_not_found(id));
        }
        info!(team_id = id, "Team deleted");
        Ok(())
    }
}

pub(crate) fn team_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Team not found with id: {id}"))
}

fn duplicate(name: &str) -> AppError {
    AppError::conflict(format!("Team already exists: {name}"))
}

fn normalize(input: TeamInput) -> Result<NewTeam, AppError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Team name must not be blank"));
    }
    Ok(NewTeam {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::error::ErrorKind;

    #[test]
    fn test_normalize_trims_name() {
        let team = normalize(TeamInput {
            name: "  Chicago Bulls ".to_string(),
        })
        .unwrap();
        assert_eq!(team.name, "Chicago Bulls");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = normalize(TeamInput {
            name: "   ".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
