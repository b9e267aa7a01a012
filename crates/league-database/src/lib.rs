//! # league-database
//!
//! PostgreSQL connection management, embedded migrations, and concrete
//! repositories for every league entity.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
