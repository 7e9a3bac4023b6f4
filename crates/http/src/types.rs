//! Wire types for the identity endpoints

use serde::{Deserialize, Serialize};

/// Response of `POST /auth/refresh`.
///
/// Only the access token is renewed; the refresh token keeps its original
/// lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}
