//! Session model and the authentication check over the token store

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::profile::UserProfile;
use crate::store::{keys, SessionStore};

/// Role tag that grants access to the console.
pub const ADMIN_ROLE: &str = "administrador";

/// Where the current session material came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionSource {
    /// Handed off by the login application through query parameters.
    Query,
    /// Recovered from the persisted store.
    Storage,
    /// No session material anywhere.
    None,
}

/// A fully materialized session, exclusively owned by the token store.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: UserProfile,
    pub role: String,
    pub source: SessionSource,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// What the token store currently holds, read in one pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthSnapshot {
    /// True only when token, user payload and role are all present and the
    /// payload parses. Partial state reads as unauthenticated.
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub role: Option<String>,
}

impl AuthSnapshot {
    /// Whether the stored role grants console access.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Derive the authentication state from the store.
///
/// A payload that fails to parse is logged and treated as absent
/// (malformed storage falls through to unauthenticated, it never errors).
pub fn check_authentication(store: &dyn SessionStore) -> AuthSnapshot {
    let token = store.get(keys::ACCESS_TOKEN);
    let role = store.get(keys::USER_ROLE);
    let user = store.get(keys::USER_DATA).and_then(|raw| {
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(%err, "stored user payload failed to parse");
                None
            }
        }
    });

    let is_authenticated = token.is_some() && role.is_some() && user.is_some();
    AuthSnapshot {
        is_authenticated,
        user,
        token,
        role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const USER_JSON: &str = r#"{"id":1,"username":"admin","email":"admin@aula.edu","first_name":"Ana","last_name":"García","role":"admin","is_active":true,"created_at":"2023-11-20T08:30:00Z"}"#;

    #[test]
    fn empty_store_is_unauthenticated() {
        let store = MemoryStore::new();
        let snapshot = check_authentication(&store);
        assert!(!snapshot.is_authenticated);
        assert_eq!(snapshot.user, None);
        assert_eq!(snapshot.token, None);
        assert_eq!(snapshot.role, None);
    }

    #[test]
    fn complete_store_is_authenticated() {
        let store = MemoryStore::new();
        store.set(keys::ACCESS_TOKEN, "t1");
        store.set(keys::USER_DATA, USER_JSON);
        store.set(keys::USER_ROLE, ADMIN_ROLE);

        let snapshot = check_authentication(&store);
        assert!(snapshot.is_authenticated);
        assert!(snapshot.is_admin());
        assert_eq!(snapshot.token.as_deref(), Some("t1"));
        assert_eq!(snapshot.user.unwrap().username, "admin");
    }

    #[test]
    fn missing_role_is_partial_state() {
        let store = MemoryStore::new();
        store.set(keys::ACCESS_TOKEN, "t1");
        store.set(keys::USER_DATA, USER_JSON);

        let snapshot = check_authentication(&store);
        assert!(!snapshot.is_authenticated);
        assert_eq!(snapshot.token.as_deref(), Some("t1"));
    }

    #[test]
    fn malformed_user_payload_is_unauthenticated() {
        let store = MemoryStore::new();
        store.set(keys::ACCESS_TOKEN, "t1");
        store.set(keys::USER_DATA, "{not json");
        store.set(keys::USER_ROLE, ADMIN_ROLE);

        let snapshot = check_authentication(&store);
        assert!(!snapshot.is_authenticated);
        assert_eq!(snapshot.user, None);
    }

    #[test]
    fn non_admin_role_is_present_but_not_admin() {
        let store = MemoryStore::new();
        store.set(keys::ACCESS_TOKEN, "t1");
        store.set(keys::USER_DATA, USER_JSON);
        store.set(keys::USER_ROLE, "docente");

        let snapshot = check_authentication(&store);
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.is_admin());
    }
}
