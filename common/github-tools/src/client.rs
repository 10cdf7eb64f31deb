//! GitHub client implementation

use crate::error::RemoteError;
use crate::{DEFAULT_API_URL, DEFAULT_USER_AGENT, GITHUB_ACCEPT};
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::fmt;

/// Opaque GitHub token sent with every request
///
/// The value never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this token
    pub fn authorization_header(&self) -> String {
        format!("token {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Connection settings shared by all adapters
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub token: Credential,
    pub api_url: String,
    pub user_agent: String,
}

impl GitHubConfig {
    /// Settings for the public API at `api.github.com`
    pub fn new(token: Credential) -> Self {
        Self {
            token,
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// GitHub API client for making authenticated requests
///
/// The client is immutable once built. Every adapter issues a single blocking
/// request and hands back either the shaped record or a [`RemoteError`].
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) config: GitHubConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// Build a request against `path` carrying the fixed header set
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.api_url.trim_end_matches('/'), path);

        self.client
            .request(method, url)
            .header(AUTHORIZATION, self.config.token.authorization_header())
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, self.config.user_agent.as_str())
    }

    /// Send `request` and decode the body when the status is exactly `expected`
    ///
    /// Any other status yields [`RemoteError::Status`] carrying the response
    /// body. The body is decoded as UTF-8 with invalid sequences replaced by
    /// U+FFFD. Transport and decoding failures are folded into the same type.
    pub(crate) fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> Result<T, RemoteError> {
        let response = request.send().map_err(RemoteError::transport)?;
        let status = response.status();

        if status != expected {
            let error_text = match response.bytes() {
                Ok(body) => String::from_utf8_lossy(&body).into_owned(),
                Err(_) => "Unknown error".to_string(),
            };
            tracing::warn!(status = status.as_u16(), "GitHub request failed");
            return Err(RemoteError::status(status.as_u16(), error_text));
        }

        response.json().map_err(RemoteError::decode)
    }
}
