//! Code search

use crate::SEARCH_PAGE_SIZE;
use crate::client::GitHubClient;
use crate::error::RemoteError;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    name: String,
    repository: SearchItemRepository,
    html_url: String,
    path: String,
}

#[derive(Deserialize)]
struct SearchItemRepository {
    full_name: String,
}

/// One file matching a code search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSearchHit {
    #[serde(rename = "file")]
    pub file_name: String,
    #[serde(rename = "repo")]
    pub repository_full_name: String,
    pub url: String,
    pub path: String,
}

impl From<SearchItem> for CodeSearchHit {
    fn from(item: SearchItem) -> Self {
        Self {
            file_name: item.name,
            repository_full_name: item.repository.full_name,
            url: item.html_url,
            path: item.path,
        }
    }
}

impl GitHubClient {
    /// Search code with a GitHub code-search `query`
    ///
    /// At most [`SEARCH_PAGE_SIZE`] hits are returned. A response without an
    /// `items` array yields no hits.
    ///
    /// # Errors
    /// Returns [`RemoteError`] on any status other than 200, or when the
    /// request or the response body fails.
    pub fn search_code(&self, query: &str) -> Result<Vec<CodeSearchHit>, RemoteError> {
        tracing::debug!(query, "searching code");

        let per_page = SEARCH_PAGE_SIZE.to_string();
        let request = self
            .request(Method::GET, "/search/code")
            .query(&[("q", query), ("per_page", per_page.as_str())]);

        let results: SearchResponse = self.execute(request, StatusCode::OK)?;
        Ok(results
            .items
            .into_iter()
            .take(SEARCH_PAGE_SIZE)
            .map(CodeSearchHit::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_items_is_empty() {
        let response: SearchResponse =
            serde_json::from_value(json!({"total_count": 0, "incomplete_results": false}))
                .unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_hit_from_item() {
        let response: SearchResponse = serde_json::from_value(json!({
            "items": [{
                "name": "test.py",
                "path": "src/test.py",
                "html_url": "https://github.com/testuser/test-repo/blob/main/src/test.py",
                "repository": {"full_name": "testuser/test-repo", "id": 7}
            }]
        }))
        .unwrap();

        let hits: Vec<CodeSearchHit> = response.items.into_iter().map(Into::into).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(
            serde_json::to_value(&hits[0]).unwrap(),
            json!({
                "file": "test.py",
                "repo": "testuser/test-repo",
                "url": "https://github.com/testuser/test-repo/blob/main/src/test.py",
                "path": "src/test.py"
            })
        );
    }
}
