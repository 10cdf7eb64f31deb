//! Tool dispatch

use super::args::{
    CreateGithubIssueArgs, GetRepositoryInfoArgs, GetUserRepositoriesArgs, SearchGithubCodeArgs,
};
use super::{ToolDefinition, ToolError, ToolKind};
use github_tools::{GitHubClient, RemoteError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result of one tool invocation as handed back to the agent
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub tool: ToolKind,
    /// Success record, or the `error`/`status_code`/`message` object
    pub value: Value,
    pub is_error: bool,
}

/// Callable surface of the four GitHub tools
pub struct ToolRegistry<'a> {
    client: &'a GitHubClient,
}

impl<'a> ToolRegistry<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        ToolKind::ALL.into_iter().map(ToolKind::definition).collect()
    }

    /// Invoke the tool called `name` with JSON `arguments`
    ///
    /// A GitHub failure is returned as an `Ok` output with `is_error` set, so
    /// the agent sees it as the tool's answer.
    ///
    /// # Errors
    /// Returns [`ToolError`] when the name is unknown or the arguments do not
    /// match the tool's schema.
    pub fn invoke(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError> {
        let tool: ToolKind = name.parse()?;
        tracing::info!(%tool, "invoking tool");

        match tool {
            ToolKind::ListUserRepositories => {
                let args: GetUserRepositoriesArgs = parse_arguments(tool, arguments)?;
                render(tool, self.client.list_user_repositories(&args.username))
            }
            ToolKind::CreateIssue => {
                let args: CreateGithubIssueArgs = parse_arguments(tool, arguments)?;
                render(
                    tool,
                    self.client
                        .create_issue(&args.owner, &args.repo, &args.title, &args.body),
                )
            }
            ToolKind::SearchCode => {
                let args: SearchGithubCodeArgs = parse_arguments(tool, arguments)?;
                render(tool, self.client.search_code(&args.query))
            }
            ToolKind::GetRepositoryInfo => {
                let args: GetRepositoryInfoArgs = parse_arguments(tool, arguments)?;
                render(
                    tool,
                    self.client.get_repository_info(&args.owner, &args.repo),
                )
            }
        }
    }
}

fn parse_arguments<T: DeserializeOwned>(tool: ToolKind, arguments: Value) -> Result<T, ToolError> {
    // Agents sometimes send `null` for tools without arguments
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };

    serde_json::from_value(arguments)
        .map_err(|source| ToolError::InvalidArguments { tool, source })
}

fn render<T: Serialize>(
    tool: ToolKind,
    result: Result<T, RemoteError>,
) -> Result<ToolOutput, ToolError> {
    let (value, is_error) = match result {
        Ok(record) => (serde_json::to_value(&record), false),
        Err(error) => {
            tracing::warn!(%tool, %error, "tool call failed remotely");
            (serde_json::to_value(&error), true)
        }
    };

    Ok(ToolOutput {
        tool,
        value: value.map_err(|source| ToolError::Render { tool, source })?,
        is_error,
    })
}
