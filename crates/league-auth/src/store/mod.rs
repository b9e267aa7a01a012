//! Credential store contract.

pub mod memory;
pub mod postgres;

use std::fmt::Debug;

use async_trait::async_trait;

use league_core::result::AppResult;
use league_entity::user::{NewUser, User};

pub use memory::MemoryCredentialStore;

/// Persistence of identities as needed by authentication.
///
/// Implementations must keep logins unique: `save` fails with a
/// `Conflict` error when the login is already taken at write time,
/// regardless of any earlier `exists_by_login` answer.
#[async_trait]
pub trait CredentialStore: Send + Sync + Debug + 'static {
    /// Look up an identity by its exact login.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Check whether a login is registered.
    async fn exists_by_login(&self, login: &str) -> AppResult<bool>;

    /// Persist a new identity and return it with its assigned id.
    async fn save(&self, identity: NewUser) -> AppResult<User>;
}
