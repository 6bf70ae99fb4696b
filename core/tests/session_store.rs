mod common;

use std::sync::Arc;

use appshell_core::api::{
    SessionError, SessionStatus, SessionStore, SessionToken, User, AUTH_TOKEN_KEY,
};
use common::FakeStore;
use pretty_assertions::assert_eq;

fn user() -> User {
    User {
        id: "42".to_string(),
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
    }
}

#[tokio::test]
async fn starts_uninitialized() {
    let store = SessionStore::new(Arc::new(FakeStore::new()));
    assert_eq!(store.status(), SessionStatus::Uninitialized);
    assert!(store.is_initializing());
    assert!(!store.is_logged_in());
    assert_eq!(store.user(), None);
}

#[tokio::test]
async fn initialize_without_token_twice_stays_logged_out() {
    let store = SessionStore::new(Arc::new(FakeStore::new()));

    store.initialize().await;
    assert!(!store.is_logged_in());
    assert!(!store.is_initializing());
    assert_eq!(store.status(), SessionStatus::LoggedOut);

    store.initialize().await;
    assert!(!store.is_logged_in());
    assert!(!store.is_initializing());
}

#[tokio::test]
async fn initialize_with_token_logs_in_without_profile() {
    let secure = Arc::new(FakeStore::with_value(AUTH_TOKEN_KEY, "tok"));
    let store = SessionStore::new(secure);

    store.initialize().await;

    assert!(store.is_logged_in());
    assert!(!store.is_initializing());
    assert_eq!(store.status(), SessionStatus::LoggedIn);
    assert_eq!(store.user(), None);
}

#[tokio::test]
async fn initialize_read_failure_is_swallowed() {
    let secure = Arc::new(FakeStore::with_value(AUTH_TOKEN_KEY, "tok"));
    secure.fail_gets();
    let store = SessionStore::new(secure);

    store.initialize().await;

    assert!(!store.is_logged_in());
    assert!(!store.is_initializing());
}

#[tokio::test]
async fn login_persists_token_and_survives_restart() {
    let secure = Arc::new(FakeStore::new());
    let store = SessionStore::new(secure.clone());
    store.initialize().await;

    store
        .login(SessionToken::new("tok-1"), user())
        .await
        .unwrap();

    assert!(store.is_logged_in());
    assert_eq!(store.user(), Some(user()));
    assert_eq!(secure.value(AUTH_TOKEN_KEY).as_deref(), Some("tok-1"));

    // 模拟重启
    let restarted = SessionStore::new(secure.clone());
    restarted.initialize().await;
    assert!(restarted.is_logged_in());
    assert_eq!(restarted.user(), None);
}

#[tokio::test]
async fn login_before_initialize_clears_initializing() {
    let store = SessionStore::new(Arc::new(FakeStore::new()));
    store.login(SessionToken::new("t"), user()).await.unwrap();
    assert!(!store.is_initializing());
    assert_eq!(store.status(), SessionStatus::LoggedIn);
}

#[tokio::test]
async fn login_write_failure_propagates_and_keeps_state() {
    let secure = Arc::new(FakeStore::new());
    secure.fail_sets();
    let store = SessionStore::new(secure.clone());
    store.initialize().await;

    let err = store
        .login(SessionToken::new("tok"), user())
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::Storage(_)));
    assert!(!store.is_logged_in());
    assert_eq!(store.user(), None);
    assert_eq!(secure.value(AUTH_TOKEN_KEY), None);
}

#[tokio::test]
async fn logout_removes_token() {
    let secure = Arc::new(FakeStore::new());
    let store = SessionStore::new(secure.clone());
    store.login(SessionToken::new("tok"), user()).await.unwrap();

    store.logout().await.unwrap();

    assert_eq!(secure.value(AUTH_TOKEN_KEY), None);
    assert!(!store.is_logged_in());
    assert_eq!(store.user(), None);
    assert_eq!(store.status(), SessionStatus::LoggedOut);
}

#[tokio::test]
async fn logout_delete_failure_propagates_and_keeps_state() {
    let secure = Arc::new(FakeStore::new());
    let store = SessionStore::new(secure.clone());
    store.login(SessionToken::new("tok"), user()).await.unwrap();
    secure.fail_deletes();

    assert!(store.logout().await.is_err());
    assert!(store.is_logged_in());
    assert_eq!(store.user(), Some(user()));
    assert_eq!(secure.value(AUTH_TOKEN_KEY).as_deref(), Some("tok"));
}

#[tokio::test]
async fn subscribers_observe_transitions() {
    let store = SessionStore::new(Arc::new(FakeStore::new()));
    let mut rx = store.subscribe();

    store.login(SessionToken::new("tok"), user()).await.unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_logged_in);

    store.logout().await.unwrap();
    rx.changed().await.unwrap();
    assert!(!rx.borrow_and_update().is_logged_in);
}
