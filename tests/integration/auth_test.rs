//! Integration tests for sign-up, sign-in and the current-user endpoint.

use axum::http::StatusCode;
use serde_json::json;

use league_auth::CredentialStore;
use league_entity::user::UserRole;

use crate::helpers::{TestApp, token_of};

#[tokio::test]
async fn test_sign_up_sign_in_and_me() {
    let app = TestApp::new();

    let signed_up = app
        .request(
            "POST",
            "/api/auth/sign-up",
            Some(json!({ "username": "alice", "password": "pw1" })),
            None,
        )
        .await;
    assert_eq!(signed_up.status, StatusCode::OK);
    assert_eq!(signed_up.body["success"], true);
    let first = token_of(&signed_up);
    assert_eq!(first.split('.').count(), 3);

    let wrong = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(json!({ "username": "alice", "password": "wrong" })),
            None,
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let second = app.token_for("alice", "pw1").await;

    for token in [&first, &second] {
        let me = app.request("GET", "/api/auth/me", None, Some(token)).await;
        assert_eq!(me.status, StatusCode::OK);
        assert_eq!(me.body["data"]["username"], "alice");
        assert_eq!(me.body["data"]["role"], "USER");
        assert_eq!(me.body["data"]["authorities"], json!(["ROLE_USER"]));
    }
}

#[tokio::test]
async fn test_duplicate_sign_up_is_conflict() {
    let app = TestApp::new();
    app.create_user("bob", "original", UserRole::User).await;
    let before = app.store.find_by_login("bob").await.unwrap().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/sign-up",
            Some(json!({ "username": "bob", "password": "other" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    let after = app.store.find_by_login("bob").await.unwrap().unwrap();
    assert_eq!(before.password_hash, after.password_hash);
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_look_the_same() {
    let app = TestApp::new();
    app.create_user("known_user", "right", UserRole::User).await;

    let unknown = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(json!({ "username": "unknown_user", "password": "anything" })),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(json!({ "username": "known_user", "password": "wrong_secret" })),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_login_and_secret_aliases() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/sign-up",
            Some(json!({ "login": "carol", "secret": "pw" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.store.find_by_login("carol").await.unwrap().is_some());
}

#[tokio::test]
async fn test_blank_credentials_are_rejected() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/sign-up",
            Some(json!({ "username": "  ", "password": "" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty());
}
