//! Credential extraction from the login-application handoff

use std::collections::HashMap;

use aula_core::{keys, Session, SessionSource, SessionStore, UserProfile, ADMIN_ROLE};
use chrono::DateTime;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Query parameter names the login application appends on handoff.
///
/// They intentionally mirror the storage keys so the two layouts stay in
/// lockstep.
pub mod params {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USER_DATA: &str = "user_data";
    pub const USER_ROLE: &str = "user_role";
    pub const AUTH_SOURCE: &str = "auth_source";
    pub const AUTH_TIMESTAMP: &str = "auth_timestamp";

    /// Everything that must never survive in the address bar.
    pub const SENSITIVE: [&str; 6] = [
        ACCESS_TOKEN,
        REFRESH_TOKEN,
        USER_DATA,
        USER_ROLE,
        AUTH_SOURCE,
        AUTH_TIMESTAMP,
    ];
}

/// Why a present credential set was turned away.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("user payload is not valid JSON: {0}")]
    MalformedUser(#[from] serde_json::Error),

    #[error("role `{0}` does not grant console access")]
    RoleMismatch(String),
}

/// Result of inspecting a page URL for handoff credentials.
#[derive(Debug)]
pub enum ExtractOutcome {
    /// Credentials were present, valid, and persisted into the store.
    Extracted(Session),
    /// The mandatory keys are absent; the token store decides what the
    /// session is. Not a failure.
    NoCredentials,
    /// Credentials were present but unusable; storage was left untouched.
    Rejected(ExtractError),
}

/// Inspect `url` for a credential handoff and persist it into `store`.
///
/// Mandatory keys are the access token, refresh token, user payload and
/// role; source and timestamp are optional extras. Nothing is written
/// until the whole set has been validated, so a rejected handoff leaves
/// existing storage exactly as it was.
pub fn extract_session(url: &Url, store: &dyn SessionStore) -> ExtractOutcome {
    let mut pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();

    let mandatory = (
        pairs.remove(params::ACCESS_TOKEN),
        pairs.remove(params::REFRESH_TOKEN),
        pairs.remove(params::USER_DATA),
        pairs.remove(params::USER_ROLE),
    );
    let (Some(access_token), Some(refresh_token), Some(raw_user), Some(role)) = mandatory else {
        return ExtractOutcome::NoCredentials;
    };

    let user: UserProfile = match serde_json::from_str(&raw_user) {
        Ok(user) => user,
        Err(err) => {
            warn!(%err, "handoff user payload failed to parse");
            return ExtractOutcome::Rejected(err.into());
        }
    };
    if role != ADMIN_ROLE {
        warn!(%role, "handoff rejected: role does not grant console access");
        return ExtractOutcome::Rejected(ExtractError::RoleMismatch(role));
    }

    store.set(keys::ACCESS_TOKEN, &access_token);
    store.set(keys::REFRESH_TOKEN, &refresh_token);
    store.set(keys::USER_DATA, &raw_user);
    store.set(keys::USER_ROLE, &role);
    if let Some(source) = pairs.remove(params::AUTH_SOURCE) {
        store.set(keys::AUTH_SOURCE, &source);
    }
    if let Some(timestamp) = pairs.remove(params::AUTH_TIMESTAMP) {
        if DateTime::parse_from_rfc3339(&timestamp).is_ok() {
            store.set(keys::AUTH_TIMESTAMP, &timestamp);
        } else {
            warn!(%timestamp, "handoff timestamp is not RFC 3339, dropping");
        }
    }

    debug!(username = %user.username, "session extracted from login handoff");
    ExtractOutcome::Extracted(Session {
        access_token,
        refresh_token: Some(refresh_token),
        user,
        role,
        source: SessionSource::Query,
    })
}

/// Strip every sensitive handoff key from `url`.
///
/// Returns the cleaned URL, or `None` when the address bar needs no
/// rewrite. Unrelated query parameters are preserved.
pub fn scrub_url(url: &Url) -> Option<Url> {
    let total = url.query_pairs().count();
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params::SENSITIVE.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if retained.len() == total {
        return None;
    }

    let mut cleaned = url.clone();
    if retained.is_empty() {
        cleaned.set_query(None);
    } else {
        let mut query = cleaned.query_pairs_mut();
        query.clear();
        query.extend_pairs(retained);
    }
    Some(cleaned)
}
