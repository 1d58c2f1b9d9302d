//! Integration tests for the persisted console session.

use std::sync::Arc;

use orgdesk_auth::config::AuthConfig;
use orgdesk_auth::service::AuthService;
use orgdesk_auth::session::SessionStore;
use orgdesk_core::SimulatedLatency;
use orgdesk_core::repository::{SESSION_TOKEN_SLOT, SlotStore};
use orgdesk_store::MemorySlotStore;

fn service() -> Arc<AuthService> {
    Arc::new(
        AuthService::new(AuthConfig {
            jwt_secret: "session-secret".into(),
            latency: SimulatedLatency::none(),
            ..Default::default()
        })
        .unwrap(),
    )
}

#[tokio::test]
async fn boot_without_token_is_anonymous() {
    let slots = Arc::new(MemorySlotStore::new());
    let mut session = SessionStore::new(slots, service());

    let state = session.boot().await;
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[tokio::test]
async fn login_persists_token_and_adopts_user() {
    let slots = Arc::new(MemorySlotStore::new());
    let mut session = SessionStore::new(slots.clone(), service());

    session.login("admin@example.com", "password").await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().id, "admin-1");
    let persisted = slots.read(SESSION_TOKEN_SLOT).unwrap();
    assert_eq!(persisted.as_deref(), session.token());
}

#[tokio::test]
async fn failed_login_leaves_state_untouched() {
    let slots = Arc::new(MemorySlotStore::new());
    let mut session = SessionStore::new(slots.clone(), service());

    assert!(session.login("admin@example.com", "nope").await.is_err());
    assert!(!session.is_authenticated());
    assert_eq!(slots.read(SESSION_TOKEN_SLOT).unwrap(), None);
}

#[tokio::test]
async fn boot_restores_validated_session() {
    let slots = Arc::new(MemorySlotStore::new());
    let auth = service();

    let token = {
        let mut first = SessionStore::new(slots.clone(), auth.clone());
        first.login("admin@example.com", "password").await.unwrap();
        first.token().unwrap().to_string()
    };

    let mut reloaded = SessionStore::new(slots, auth);
    let state = reloaded.boot().await;
    assert!(state.is_authenticated);
    assert_eq!(state.token.as_deref(), Some(token.as_str()));
    assert_eq!(state.user.as_ref().unwrap().name, "Super Admin");
}

#[tokio::test]
async fn boot_discards_invalid_token() {
    let slots = Arc::new(MemorySlotStore::new());
    slots
        .write(SESSION_TOKEN_SLOT, "fake-jwt-token-123456")
        .unwrap();

    let mut session = SessionStore::new(slots.clone(), service());
    let state = session.boot().await;

    assert!(!state.is_authenticated);
    assert_eq!(slots.read(SESSION_TOKEN_SLOT).unwrap(), None);
}

#[tokio::test]
async fn logout_erases_token_and_resets_state() {
    let slots = Arc::new(MemorySlotStore::new());
    let mut session = SessionStore::new(slots.clone(), service());
    session.login("admin@example.com", "password").await.unwrap();

    session.logout().unwrap();

    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(session.token().is_none());
    assert_eq!(slots.read(SESSION_TOKEN_SLOT).unwrap(), None);
}
