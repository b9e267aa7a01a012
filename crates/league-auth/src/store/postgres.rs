//! PostgreSQL-backed credential store.

use async_trait::async_trait;

use league_core::result::AppResult;
use league_database::repositories::UserRepository;
use league_entity::user::{NewUser, User};

use super::CredentialStore;

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        self.find_by_username(login).await
    }

    async fn exists_by_login(&self, login: &str) -> AppResult<bool> {
        self.exists_by_username(login).await
    }

    async fn save(&self, identity: NewUser) -> AppResult<User> {
        self.create(&identity).await
    }
}
