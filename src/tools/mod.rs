//! Tools exposed to the LLM agent
//!
//! Each tool wraps one adapter of [`github_tools::GitHubClient`] and declares a
//! JSON schema for its arguments. The [`ToolRegistry`] is the callable surface
//! an agent framework binds to: it takes a tool name plus JSON arguments and
//! hands back the flat JSON result.

pub mod args;
pub mod registry;

pub use registry::{ToolOutput, ToolRegistry};

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four fixed tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    ListUserRepositories,
    CreateIssue,
    SearchCode,
    GetRepositoryInfo,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::ListUserRepositories,
        ToolKind::CreateIssue,
        ToolKind::SearchCode,
        ToolKind::GetRepositoryInfo,
    ];

    /// Name under which the tool is offered to the model
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::ListUserRepositories => "get_user_repositories",
            ToolKind::CreateIssue => "create_github_issue",
            ToolKind::SearchCode => "search_github_code",
            ToolKind::GetRepositoryInfo => "get_repository_info",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::ListUserRepositories => {
                "List a GitHub user's repositories with name, URL, language, stars, \
                 description and last update time."
            }
            ToolKind::CreateIssue => {
                "Create a new issue in a GitHub repository. Every call creates a new issue."
            }
            ToolKind::SearchCode => {
                "Search code on GitHub. Returns up to 5 matching files with their repository, \
                 URL and path."
            }
            ToolKind::GetRepositoryInfo => {
                "Get detailed information about a GitHub repository: description, language, \
                 stars, forks, open issues and timestamps."
            }
        }
    }

    /// JSON schema of the tool's arguments
    pub fn parameters(self) -> Value {
        match self {
            ToolKind::ListUserRepositories => schema_of::<args::GetUserRepositoriesArgs>(),
            ToolKind::CreateIssue => schema_of::<args::CreateGithubIssueArgs>(),
            ToolKind::SearchCode => schema_of::<args::SearchGithubCodeArgs>(),
            ToolKind::GetRepositoryInfo => schema_of::<args::GetRepositoryInfoArgs>(),
        }
    }

    pub fn read_only(self) -> bool {
        !matches!(self, ToolKind::CreateIssue)
    }

    pub fn idempotent(self) -> bool {
        // Multiple calls create multiple issues
        !matches!(self, ToolKind::CreateIssue)
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name(),
            description: self.description(),
            parameters: self.parameters(),
            read_only: self.read_only(),
            idempotent: self.idempotent(),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }
}

/// Declared surface of one tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
    pub read_only: bool,
    pub idempotent: bool,
}

/// Failure to dispatch a tool call
///
/// A remote GitHub failure is not a `ToolError`; it is a regular tool result
/// carrying the error payload.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: ToolKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render {tool} result: {source}")]
    Render {
        tool: ToolKind,
        #[source]
        source: serde_json::Error,
    },
}

fn schema_of<T: JsonSchema>() -> Value {
    let mut schema = schemars::schema_for!(T);
    schema.remove("$schema");
    schema.remove("title");
    schema.to_value()
}
