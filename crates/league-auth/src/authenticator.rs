//! Sign-up and sign-in flows.

use std::sync::Arc;

use tracing::{info, warn};

use league_core::error::ErrorKind;
use league_entity::user::{NewUser, User};

use crate::error::AuthError;
use crate::jwt::{ExtraClaims, TokenCodec};
use crate::password::PasswordHasher;
use crate::store::CredentialStore;

/// Validates credentials against the credential store and issues tokens.
#[derive(Debug)]
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<PasswordHasher>,
    codec: Arc<TokenCodec>,
    /// Hash verified against when the login is unknown, so both failure paths cost the same.
    decoy_hash: String,
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        codec: Arc<TokenCodec>,
    ) -> Result<Self, AuthError> {
        let decoy_hash = hasher.hash("decoy-password-never-matches")?;
        Ok(Self {
            store,
            hasher,
            codec,
            decoy_hash,
        })
    }

    /// Registers a new `USER` identity and returns a token for it.
    pub async fn sign_up(&self, login: &str, secret: &str) -> Result<String, AuthError> {
        if self.store.exists_by_login(login).await? {
            return Err(AuthError::IdentityAlreadyExists(login.to_string()));
        }

        let password_hash = self.hasher.hash(secret)?;
        let user = self
            .store
            .save(NewUser::registered(login, password_hash))
            .await
            .map_err(|e| match e.kind {
                // Lost the race against a concurrent sign-up for the same login.
                ErrorKind::Conflict => AuthError::IdentityAlreadyExists(login.to_string()),
                _ => AuthError::Internal(e),
            })?;

        info!(user_id = user.id, username = %user.username, "User signed up");
        self.issue_for(&user)
    }

    /// Verifies credentials and returns a token carrying the identity's id and role.
    pub async fn sign_in(&self, login: &str, secret: &str) -> Result<String, AuthError> {
        let user = self.verify_credentials(login, secret).await?;
        info!(user_id = user.id, username = %user.username, "User signed in");
        self.issue_for(&user)
    }

    /// Loads the identity and compares the secret with its stored hash.
    ///
    /// Unknown login and wrong secret both yield [`AuthError::InvalidCredentials`].
    pub async fn verify_credentials(&self, login: &str, secret: &str) -> Result<User, AuthError> {
        let Some(user) = self.store.find_by_login(login).await? else {
            let _ = self.hasher.verify(secret, &self.decoy_hash);
            warn!("Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        };

        match self.hasher.verify(secret, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                warn!("Sign-in rejected");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                warn!(user_id = user.id, error = %e, "Sign-in rejected: stored hash unusable");
                return Err(AuthError::InvalidCredentials);
            }
        }

        Ok(user)
    }

    fn issue_for(&self, user: &User) -> Result<String, AuthError> {
        self.codec.issue(
            &user.username,
            ExtraClaims::for_user(user),
            self.codec.validity(),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::jwt::SigningKey;
    use crate::store::MemoryCredentialStore;
    use league_entity::user::UserRole;

    const KEY: &str = "A7RjhH3kKJLusngyTPWbIZcTvWZTeJdTuMyY79pQccY=";

    struct Fixture {
        store: Arc<MemoryCredentialStore>,
        codec: Arc<TokenCodec>,
        auth: Arc<Authenticator>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryCredentialStore::new());
        let codec = Arc::new(TokenCodec::with_key(
            SigningKey::from_base64(KEY).unwrap(),
            Duration::seconds(3600),
        ));
        let auth = Arc::new(
            Authenticator::new(
                store.clone(),
                Arc::new(PasswordHasher::new()),
                Arc::clone(&codec),
            )
            .unwrap(),
        );
        Fixture { store, codec, auth }
    }

    #[tokio::test]
    async fn test_sign_up_issues_token_with_id_and_role() {
        let f = fixture();
        let token = f.auth.sign_up("alice", "pw1").await.unwrap();

        let claims = f.codec.decode(&token).unwrap();
        let stored = f.store.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.id, Some(stored.id));
        assert_eq!(claims.role, Some(UserRole::User));
        assert_eq!(stored.role, UserRole::User);
        assert_ne!(stored.password_hash, "pw1");
    }

    #[tokio::test]
    async fn test_second_sign_up_is_rejected_without_mutation() {
        let f = fixture();
        f.auth.sign_up("alice", "pw1").await.unwrap();
        let before = f.store.find_by_login("alice").await.unwrap().unwrap();

        let err = f.auth.sign_up("alice", "other").await.unwrap_err();
        assert!(matches!(err, AuthError::IdentityAlreadyExists(ref l) if l == "alice"));

        let after = f.store.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(f.store.len(), 1);
        assert_eq!(before.password_hash, after.password_hash);
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_secret_are_indistinguishable() {
        let f = fixture();
        f.auth.sign_up("known_user", "right").await.unwrap();

        let unknown = f.auth.sign_in("unknown_user", "anything").await.unwrap_err();
        let wrong = f.auth.sign_in("known_user", "wrong_secret").await.unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_alice_scenario() {
        let f = fixture();
        let a = f.auth.sign_up("alice", "pw1").await.unwrap();
        assert!(f.codec.is_valid(&a, "alice"));

        let err = f.auth.sign_in("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        let b = f.auth.sign_in("alice", "pw1").await.unwrap();
        assert!(f.codec.is_valid(&b, "alice"));
        assert!(f.codec.is_valid(&a, "alice"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sign_ups_for_one_login_have_one_winner() {
        let f = fixture();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let auth = Arc::clone(&f.auth);
                tokio::spawn(async move { auth.sign_up("racer", &format!("pw{i}")).await })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => winners += 1,
                Err(AuthError::IdentityAlreadyExists(login)) => assert_eq!(login, "racer"),
                Err(other) => panic!("unexpected sign-up error: {other:?}"),
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(f.store.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_stored_hash_reads_as_invalid_credentials() {
        let f = fixture();
        f.store
            .save(NewUser::registered("mallory", "not-a-phc-string"))
            .await
            .unwrap();

        let err = f.auth.sign_in("mallory", "anything").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
