//! Season entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A season spanning an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Season {
    /// Database identifier.
    pub id: i64,
    /// Season name, unique ignoring case.
    pub name: String,
    /// First day of the season.
    pub start_date: NaiveDate,
    /// Last day of the season.
    pub end_date: NaiveDate,
}

impl Season {
    /// Whether `date` falls within the season, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Values written on season create and replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSeason {
    /// Season name.
    pub name: String,
    /// First day of the season.
    pub start_date: NaiveDate,
    /// Last day of the season.
    pub end_date: NaiveDate,
}
