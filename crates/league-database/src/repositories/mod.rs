//! Repository implementations for all league entities.

pub mod matches;
pub mod player;
pub mod season;
pub mod team;
pub mod user;

pub use matches::MatchRepository;
pub use player::PlayerRepository;
pub use season::SeasonRepository;
pub use team::TeamRepository;
pub use user::UserRepository;

use league_core::error::{AppError, ErrorKind};

/// Wrap a sqlx failure as a database error with context.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}

/// Returns `true` if the failure is a violation of the named constraint.
pub(crate) fn violates(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.constraint() == Some(constraint))
}
