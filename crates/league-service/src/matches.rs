//! Match scheduling and results.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use league_core::error::AppError;
use league_database::repositories::{MatchRepository, SeasonRepository, TeamRepository};
use league_entity::matches::{Match, NewMatch};
use league_entity::season::Season;

use crate::season::season_not_found;
use crate::team::team_not_found;

/// Request body for creating or replacing a match. Missing scores count as 0.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchInput {
    pub season_id: i64,
    pub date: Option<NaiveDate>,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_team_score: Option<i32>,
    pub away_team_score: Option<i32>,
}

/// Handles match CRUD.
#[derive(Debug, Clone)]
pub struct MatchService {
    match_repo: Arc<MatchRepository>,
    season_repo: Arc<SeasonRepository>,
    team_repo: Arc<TeamRepository>,
}

impl MatchService {
    /// Creates a new match service.
    pub fn new(
        match_repo: Arc<MatchRepository>,
        season_repo: Arc<SeasonRepository>,
        team_repo: Arc<TeamRepository>,
    ) -> Self {
        Self {
            match_repo,
            season_repo,
            team_repo,
        }
    }

    /// Lists matches, optionally for one season.
    pub async fn list(&self, season_id: Option<i64>) -> Result<Vec<Match>, AppError> {
        self.match_repo.find_all(season_id).await
    }

    /// Gets one match.
    pub async fn get(&self, id: i64) -> Result<Match, AppError> {
        self.match_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| match_not_found(id))
    }

    /// Creates a match.
    pub async fn create(&self, input: MatchInput) -> Result<Match, AppError> {
        let data = self.resolve(input).await?;
        let created = self.match_repo.create(&data).await?;
        info!(
            match_id = created.id,
            season_id = created.season_id,
            "Match created"
        );
        Ok(created)
    }

    /// Replaces a match.
    pub async fn update(&self, id: i64, input: MatchInput) -> Result<Match, AppError> {
        self.get(id).await?;
        let data = self.resolve(input).await?;
        self.match_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| match_not_found(id))
    }

    /// Deletes a match.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.match_repo.delete(id).await? {
            return Err(match_not_found(id));
        }
        info!(match_id = id, "Match deleted");
        Ok(())
    }

    /// Loads the referenced season and teams, then applies the match rules.
    async fn resolve(&self, input: MatchInput) -> Result<NewMatch, AppError> {
        let season = self
            .season_repo
            .find_by_id(input.season_id)
            .await?
            .ok_or_else(|| season_not_found(input.season_id))?;
        for team_id in [input.home_team_id, input.away_team_id] {
            if self.team_repo.find_by_id(team_id).await?.is_none() {
                return Err(team_not_found(team_id));
            }
        }
        validate(&season, input)
    }
}

fn match_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Match not found with id: {id}"))
}

fn validate(season: &Season, input: MatchInput) -> Result<NewMatch, AppError> {
    if input.home_team_id == input.away_team_id {
        return Err(AppError::validation("Home and away teams must be different"));
    }
    let Some(date) = input.date else {
        return Err(AppError::validation("Match date is required"));
    };
    if !season.contains(date) {
        return Err(AppError::validation("Match date must be within the season dates"));
    }
    Ok(NewMatch {
        season_id: season.id,
        date,
        home_team_id: input.home_team_id,
        away_team_id: input.away_team_id,
        home_team_score: input.home_team_score.unwrap_or(0),
        away_team_score: input.away_team_score.unwrap_or(0),
    })
}
