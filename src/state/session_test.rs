use super::*;

// =============================================================
// Authentication flag lifecycle
// =============================================================

#[test]
fn fresh_store_is_unauthenticated() {
    let store = SessionStore::in_memory();
    assert!(!store.is_authenticated());
    assert_eq!(store.stored_username(), "");
}

#[test]
fn set_session_authenticates() {
    let store = SessionStore::in_memory();
    store.set_session("ada");
    assert!(store.is_authenticated());
    assert_eq!(store.stored_username(), "ada");
}

#[test]
fn clear_session_removes_flag_and_username_together() {
    let store = SessionStore::in_memory();
    store.set_session("ada");
    store.clear_session();
    assert!(!store.is_authenticated());
    assert_eq!(store.stored_username(), "");
}

#[test]
fn clear_session_is_idempotent() {
    let store = SessionStore::in_memory();
    store.clear_session();
    store.clear_session();
    assert!(!store.is_authenticated());
}

#[test]
fn non_true_flag_value_is_not_authenticated() {
    let durable = Arc::new(MemoryStorage::default());
    durable.set(AUTH_FLAG_KEY, "TRUE");
    let store = SessionStore::with_backends(durable, Arc::new(MemoryStorage::default()));
    assert!(!store.is_authenticated());
}

// =============================================================
// One-shot login banner
// =============================================================

#[test]
fn complete_login_persists_session_and_queues_banner() {
    let store = SessionStore::in_memory();
    store.complete_login("ada");
    assert!(store.is_authenticated());
    assert_eq!(store.stored_username(), "ada");
    assert_eq!(
        store.take_login_banner().as_deref(),
        Some("You successfully logged in.")
    );
}

#[test]
fn banner_is_consumed_on_first_take() {
    let store = SessionStore::in_memory();
    store.complete_login("ada");
    assert!(store.take_login_banner().is_some());
    assert!(store.take_login_banner().is_none());
}

#[test]
fn clear_login_banner_drops_queued_text() {
    let store = SessionStore::in_memory();
    store.queue_login_banner(LOGIN_BANNER_TEXT);
    store.clear_login_banner();
    assert!(store.take_login_banner().is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_session_and_banner() {
    let store = SessionStore::in_memory();
    store.complete_login("ada");

    // What the dashboard logout control performs.
    store.clear_session();
    store.clear_login_banner();

    assert!(!store.is_authenticated());
    assert_eq!(store.stored_username(), "");
    assert!(store.take_login_banner().is_none());
}
