//! Match entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scheduled or played match between two teams within a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Match {
    /// Database identifier.
    pub id: i64,
    /// Season the match belongs to.
    pub season_id: i64,
    /// Match day.
    pub date: NaiveDate,
    /// Home team.
    pub home_team_id: i64,
    /// Away team.
    pub away_team_id: i64,
    /// Points scored by the home team.
    pub home_team_score: i32,
    /// Points scored by the away team.
    pub away_team_score: i32,
}

/// Fully resolved values written on match create and replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMatch {
    /// Season the match belongs to.
    pub season_id: i64,
    /// Match day.
    pub date: NaiveDate,
    /// Home team.
    pub home_team_id: i64,
    /// Away team.
    pub away_team_id: i64,
    /// Points scored by the home team.
    pub home_team_score: i32,
    /// Points scored by the away team.
    pub away_team_score: i32,
}
