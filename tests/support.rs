//! Shared fixtures for integration tests
//!
//! The adapters are blocking, so the mock GitHub server lives on its own tokio
//! runtime and tests call the client from the plain test thread.

use github_agent::{GitHubClient, GitHubConfig};
use github_tools::Credential;
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// A mock GitHub API server
///
/// `server` is declared first so it shuts down before the runtime.
pub struct MockGitHub {
    pub server: MockServer,
    runtime: Runtime,
}

impl MockGitHub {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("runtime should start");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    #[allow(dead_code)]
    pub fn config(&self) -> GitHubConfig {
        GitHubConfig::new(Credential::new(TEST_TOKEN)).with_api_url(self.server.uri())
    }

    #[allow(dead_code)]
    pub fn client(&self) -> GitHubClient {
        GitHubClient::new(self.config())
    }

    #[allow(dead_code)]
    pub fn received_requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .expect("request recording should be enabled")
    }
}

/// A raw repository record as returned by the GitHub API
pub fn raw_repository(name: &str, language: Option<&str>, stars: u64) -> Value {
    json!({
        "id": 1,
        "name": name,
        "full_name": format!("testuser/{}", name),
        "html_url": format!("https://github.com/testuser/{}", name),
        "language": language,
        "stargazers_count": stars,
        "forks_count": 2,
        "open_issues_count": 3,
        "description": "Test repository",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-12-10T00:00:00Z",
        "private": false
    })
}

/// A raw code search item as returned by the GitHub API
#[allow(dead_code)]
pub fn raw_search_item(file: &str) -> Value {
    json!({
        "name": file,
        "path": format!("src/{}", file),
        "sha": "abc123",
        "html_url": format!("https://github.com/testuser/test-repo/blob/main/src/{}", file),
        "repository": {"id": 7, "full_name": "testuser/test-repo"},
        "score": 1.0
    })
}
