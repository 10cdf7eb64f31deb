//! Argument types of the exposed tools
//!
//! Doc comments on the fields become the `description` of each parameter in
//! the generated JSON schema.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetUserRepositoriesArgs {
    /// GitHub username whose repositories are listed
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateGithubIssueArgs {
    /// Owner of the repository (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Issue title
    pub title: String,
    /// Issue body text
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchGithubCodeArgs {
    /// Query in GitHub code search syntax, e.g. `async def repo:owner/name`
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRepositoryInfoArgs {
    /// Owner of the repository (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}
