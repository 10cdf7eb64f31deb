//! Issue operations

use crate::client::GitHubClient;
use crate::error::RemoteError;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct CreateIssuePayload<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// A newly created remote issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueResult {
    pub number: u64,
    pub title: String,
    #[serde(rename(deserialize = "html_url"))]
    pub url: String,
    pub state: IssueState,
}

impl GitHubClient {
    /// Create an issue in `owner/repo`
    ///
    /// Every call creates a new issue; calling twice with the same arguments
    /// creates two. `body` may be empty.
    ///
    /// # Errors
    /// Returns [`RemoteError`] on any status other than 201, 200 included.
    pub fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<IssueResult, RemoteError> {
        tracing::debug!(owner, repo, title, "creating issue");

        let path = format!("/repos/{}/{}/issues", owner, repo);
        let payload = CreateIssuePayload { title, body };
        let request = self.request(Method::POST, &path).json(&payload);

        let issue: IssueResult = self.execute(request, StatusCode::CREATED)?;
        tracing::info!(owner, repo, number = issue.number, "issue created");
        Ok(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_result_from_api_record() {
        let issue: IssueResult = serde_json::from_value(json!({
            "id": 1,
            "number": 1,
            "title": "Test Issue",
            "html_url": "https://github.com/testuser/test-repo/issues/1",
            "state": "open",
            "body": "This is a test issue"
        }))
        .unwrap();

        assert_eq!(issue.number, 1);
        assert_eq!(issue.state, IssueState::Open);
        assert_eq!(
            serde_json::to_value(&issue).unwrap(),
            json!({
                "number": 1,
                "title": "Test Issue",
                "url": "https://github.com/testuser/test-repo/issues/1",
                "state": "open"
            })
        );
    }

    #[test]
    fn test_unknown_state_is_rejected() {
        let result: Result<IssueResult, _> = serde_json::from_value(json!({
            "number": 2,
            "title": "t",
            "html_url": "u",
            "state": "locked"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_shape() {
        let payload = CreateIssuePayload {
            title: "Title",
            body: "",
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"title": "Title", "body": ""})
        );
    }
}
