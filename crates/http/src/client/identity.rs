//! Session endpoints of the identity service

use aula_core::UserProfile;
use reqwest::Method;

use super::{ClientError, IdentityClient};
use crate::types::RefreshResponse;

impl IdentityClient {
    /// Check the access token against `GET /auth/me`.
    ///
    /// A 2xx response carries the profile the token belongs to.
    pub async fn me(&self, access_token: &str) -> Result<UserProfile, ClientError> {
        let request = self.request(Method::GET, "/auth/me", access_token);
        self.execute(request).await
    }

    /// Exchange the refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/refresh", refresh_token);
        self.execute(request).await
    }

    /// Tell the backend the session is over. The response body is ignored.
    pub async fn logout(&self, access_token: &str) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/auth/logout", access_token);
        self.execute_unit(request).await
    }
}
