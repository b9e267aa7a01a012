//! Team entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team competing in the league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Team {
    /// Database identifier.
    pub id: i64,
    /// Team name, unique ignoring case.
    pub name: String,
}

/// Values written on team create and replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    /// Team name.
    pub name: String,
}
