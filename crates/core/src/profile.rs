//! User profile as issued by the identity service

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
///
/// Immutable for the lifetime of a session: a refresh or re-login replaces
/// the whole value, it is never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    /// RFC 3339 timestamp, kept as the string the backend sent.
    pub created_at: String,
}

impl UserProfile {
    /// Display name for the console header.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}
