//! HTTP integration tests driving the full router in-process.

mod auth_test;
mod helpers;
mod policy_test;
