//! Core type definitions used across the league workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
