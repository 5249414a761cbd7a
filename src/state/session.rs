//! Persisted session state.
//!
//! Two storage scopes back the store: a durable one for the
//! authentication flag and username (survives reloads and tab closure)
//! and a transient one for the one-shot login banner (dies with the
//! tab). In the browser these map to `localStorage` and `sessionStorage`;
//! tests and native builds use an in-memory backend.
//!
//! The store is provided to pages through Leptos context rather than
//! reached for as ambient global state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Durable key holding the literal string `"true"` once verified.
pub const AUTH_FLAG_KEY: &str = "auth:isAuthenticated";
/// Durable key holding the logged-in username.
pub const AUTH_USER_KEY: &str = "auth:username";
/// Transient key holding the one-shot post-login banner text.
pub const LOGIN_SUCCESS_KEY: &str = "auth:login-success";

/// Banner queued for the dashboard after a successful verification.
pub const LOGIN_BANNER_TEXT: &str = "You successfully logged in.";

/// Minimal string key-value backend.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValue for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
enum Area {
    Local,
    Session,
}

/// Backend over one of the browser storage areas. The window is looked up
/// per call; a page without storage degrades to a no-op.
#[cfg(feature = "csr")]
struct BrowserStorage {
    area: Area,
}

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn raw(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.area {
            Area::Local => window.local_storage().ok().flatten(),
            Area::Session => window.session_storage().ok().flatten(),
        }
    }
}

#[cfg(feature = "csr")]
impl KeyValue for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Handle to the client session: the durable flag + username pair and the
/// transient one-shot banner.
#[derive(Clone)]
pub struct SessionStore {
    durable: Arc<dyn KeyValue + Send + Sync>,
    transient: Arc<dyn KeyValue + Send + Sync>,
}

impl SessionStore {
    /// Build a store over explicit backends.
    pub fn with_backends(
        durable: Arc<dyn KeyValue + Send + Sync>,
        transient: Arc<dyn KeyValue + Send + Sync>,
    ) -> Self {
        Self { durable, transient }
    }

    /// Store backed by `localStorage` and `sessionStorage`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self::with_backends(
            Arc::new(BrowserStorage { area: Area::Local }),
            Arc::new(BrowserStorage {
                area: Area::Session,
            }),
        )
    }

    /// Store with in-memory backends.
    pub fn in_memory() -> Self {
        Self::with_backends(
            Arc::new(MemoryStorage::default()),
            Arc::new(MemoryStorage::default()),
        )
    }

    /// The store appropriate for the current page environment.
    pub fn for_page() -> Self {
        #[cfg(feature = "csr")]
        {
            Self::browser()
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::in_memory()
        }
    }

    /// True iff the flag is present and exactly the string `"true"`.
    pub fn is_authenticated(&self) -> bool {
        self.durable.get(AUTH_FLAG_KEY).as_deref() == Some("true")
    }

    /// Mark the session authenticated. Flag and username are written
    /// together, never one without the other.
    pub fn set_session(&self, username: &str) {
        self.durable.set(AUTH_FLAG_KEY, "true");
        self.durable.set(AUTH_USER_KEY, username);
    }

    /// Remove the flag and username together. Idempotent.
    pub fn clear_session(&self) {
        self.durable.remove(AUTH_FLAG_KEY);
        self.durable.remove(AUTH_USER_KEY);
    }

    /// The stored username, or an empty string when absent.
    pub fn stored_username(&self) -> String {
        self.durable.get(AUTH_USER_KEY).unwrap_or_default()
    }

    /// Queue the one-shot banner for the next dashboard load.
    pub fn queue_login_banner(&self, text: &str) {
        self.transient.set(LOGIN_SUCCESS_KEY, text);
    }

    /// Consume the one-shot banner: read it and delete it.
    pub fn take_login_banner(&self) -> Option<String> {
        let text = self.transient.get(LOGIN_SUCCESS_KEY);
        if text.is_some() {
            self.transient.remove(LOGIN_SUCCESS_KEY);
        }
        text
    }

    /// Drop any queued banner without reading it.
    pub fn clear_login_banner(&self) {
        self.transient.remove(LOGIN_SUCCESS_KEY);
    }

    /// The single success write path: queue the banner, then persist the
    /// session for `username`.
    pub fn complete_login(&self, username: &str) {
        self.queue_login_banner(LOGIN_BANNER_TEXT);
        self.set_session(username);
    }
}
