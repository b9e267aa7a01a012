//! # league-core
//!
//! Core crate for the basketball league backend. Contains configuration
//! schemas, pagination types, the unified error system and its HTTP rendering.
//!
//! This crate has **no** internal dependencies on other league crates.

pub mod config;
pub mod error;
pub mod response;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
