//! Repository-related operations

use crate::client::GitHubClient;
use crate::error::RemoteError;
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

/// One entry of a user's repository listing
///
/// Deserialized straight from the API record; serialized with the flat keys
/// handed to the agent (`url`, `stars`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(rename(deserialize = "html_url"))]
    pub url: String,
    pub language: Option<String>,
    #[serde(rename(serialize = "stars", deserialize = "stargazers_count"))]
    pub star_count: u64,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Full metadata of a single repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryDetail {
    #[serde(flatten)]
    pub summary: RepositorySummary,
    #[serde(rename(serialize = "forks", deserialize = "forks_count"))]
    pub fork_count: u64,
    #[serde(rename(serialize = "open_issues", deserialize = "open_issues_count"))]
    pub open_issue_count: u64,
    pub created_at: DateTime<Utc>,
}

impl GitHubClient {
    /// List the repositories of `username`
    ///
    /// Only the first page the API returns by default is read. The API order
    /// is preserved.
    ///
    /// # Errors
    /// Returns [`RemoteError`] on any status other than 200, or when the
    /// request or the response body fails.
    pub fn list_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary>, RemoteError> {
        tracing::debug!(username, "listing user repositories");

        let path = format!("/users/{}/repos", username);
        let request = self.request(Method::GET, &path);

        self.execute(request, StatusCode::OK)
    }

    /// Fetch metadata of `owner/repo`
    ///
    /// # Errors
    /// Returns [`RemoteError`] on any status other than 200, or when the
    /// request or the response body fails.
    pub fn get_repository_info(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryDetail, RemoteError> {
        tracing::debug!(owner, repo, "fetching repository information");

        let path = format!("/repos/{}/{}", owner, repo);
        let request = self.request(Method::GET, &path);

        self.execute(request, StatusCode::OK)
    }
}
