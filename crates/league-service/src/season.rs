//! Season management.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use league_core::error::AppError;
use league_database::repositories::SeasonRepository;
use league_entity::season::{NewSeason, Season};

/// Request body for creating or replacing a season.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonInput {
    /// Season name, unique ignoring case.
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Handles season CRUD.
#[derive(Debug, Clone)]
pub struct SeasonService {
    season_repo: Arc<SeasonRepository>,
}

impl SeasonService {
    /// Creates a new season service.
    pub fn new(season_repo: Arc<SeasonRepository>) -> Self {
        Self { season_repo }
    }

    /// Lists seasons, most recent first.
    pub async fn list(&self) -> Result<Vec<Season>, AppError> {
        self.season_repo.find_all().await
    }

    /// Gets one season.
    pub async fn get(&self, id: i64) -> Result<Season, AppError> {
        self.season_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| season_not_found(id))
    }

    /// Creates a season.
    pub async fn create(&self, input: SeasonInput) -> Result<Season, AppError> {
        let data = validate(input)?;
        if self.season_repo.exists_by_name(&data.name, None).await? {
            return Err(duplicate(&data.name));
        }
        let season = self.season_repo.create(&data).await?;
        info!(season_id = season.id, name = %season.name, "Season created");
        Ok(season)
    }

    /// Replaces a season.
    pub async fn update(&self, id: i64, input: SeasonInput) -> Result<Season, AppError> {
        let data = validate(input)?;
        if self.season_repo.exists_by_name(&data.name, Some(id)).await? {
            return Err(duplicate(&data.name));
        }
        self.season_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| season_not_found(id))
    }

    /// Deletes a season.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.season_repo.delete(id).await? {
            return Err(season_not_found(id));
        }
        info!(season_id = id, "Season deleted");
        Ok(())
    }
}

pub(crate) fn season_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Season not found with id: {id}"))
}

fn duplicate(name: &str) -> AppError {
    AppError::conflict(format!("Season already exists: {name}"))
}

fn validate(input: SeasonInput) -> Result<NewSeason, AppError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Season name must not be blank"));
    }
    let (Some(start_date), Some(end_date)) = (input.start_date, input.end_date) else {
        return Err(AppError::validation("Season start_date and end_date are required"));
    };
    if end_date < start_date {
        return Err(AppError::validation("Season end_date must not be before start_date"));
    }
    Ok(NewSeason {
        name: name.to_string(),
        start_date,
        end_date,
    })
}
