//! Storage port for the token store

use std::cell::RefCell;
use std::collections::HashMap;

/// Persisted state layout. All values are stored as plain strings.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USER_DATA: &str = "user_data";
    pub const USER_ROLE: &str = "user_role";
    pub const AUTH_SOURCE: &str = "auth_source";
    pub const AUTH_TIMESTAMP: &str = "auth_timestamp";

    /// Every key the session layer owns.
    pub const SESSION_KEYS: [&str; 6] = [
        ACCESS_TOKEN,
        REFRESH_TOKEN,
        USER_DATA,
        USER_ROLE,
        AUTH_SOURCE,
        AUTH_TIMESTAMP,
    ];
}

/// Port over the durable key-value store holding the session.
///
/// Production uses browser `localStorage` (durable across reloads, visible
/// to same-origin tabs); tests use [`MemoryStore`]. No component reaches
/// for a storage API directly.
///
/// Writes are fire-and-forget: implementations log and swallow backend
/// failures, mirroring how the browser storage API is used in practice.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Remove every session key. Idempotent.
    fn clear_session(&self) {
        for key in keys::SESSION_KEYS {
            self.remove(key);
        }
    }
}

/// In-memory store for tests and native tooling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
