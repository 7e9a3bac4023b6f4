//! Browser-backed token store

use aula_core::SessionStore;
use gloo::storage::{LocalStorage, Storage};
use tracing::warn;

/// `localStorage` implementation of the storage port.
///
/// Local storage rather than session storage: the session must survive
/// reloads and be visible to every same-origin tab, which is also what
/// makes the gate's cross-tab storage listener work.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        // Raw access: tokens are plain strings, not JSON documents.
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            warn!(?err, key, "failed to persist session key");
        }
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}
