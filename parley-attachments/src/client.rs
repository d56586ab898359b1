//! Authenticated API access for the session handoff.
//!
//! The generic HTTP client is a collaborator; the launcher only issues one
//! parameterized GET. `HttpApiClient` is the production implementation,
//! sending the caller's credentials as headers on every request.

use async_trait::async_trait;
use parley_api::SessionDescriptor;
use url::Url;

use crate::error::LaunchError;

/// Minimal client surface the launcher depends on.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// GET an application-relative API path, decoding a session descriptor.
    async fn get_session(&self, path: &str) -> Result<SessionDescriptor, LaunchError>;
}

/// reqwest-backed client authenticated with user id + token headers.
pub struct HttpApiClient {
    http: reqwest::Client,
    base: Url,
    user_id: String,
    auth_token: String,
}

impl HttpApiClient {
    /// `base` is the API root, e.g. `https://chat.example/api/v1/`.
    pub fn new(base: Url, user_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            user_id: user_id.into(),
            auth_token: auth_token.into(),
        }
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_session(&self, path: &str) -> Result<SessionDescriptor, LaunchError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| LaunchError::Session(e.to_string()))?;

        let response = self
            .http
            .get(url)
            .header("X-User-Id", &self.user_id)
            .header("X-Auth-Token", &self.auth_token)
            .send()
            .await
            .map_err(|e| LaunchError::Session(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| LaunchError::Session(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| LaunchError::Session(e.to_string()))
    }
}
