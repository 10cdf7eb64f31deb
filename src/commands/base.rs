//! Base types and traits for the command pattern

use crate::config::Settings;
use anyhow::Result;
use github_tools::{GitHubClient, RemoteError};
use serde::Serialize;

/// Context passed to all commands containing shared configuration and client
pub struct CommandContext {
    /// Settings loaded at startup
    pub settings: Settings,
    /// Client built from `settings.github`
    pub client: GitHubClient,
}

impl CommandContext {
    pub fn new(settings: Settings) -> Self {
        let client = GitHubClient::new(settings.github.clone());
        Self { settings, client }
    }
}

/// Trait that all commands must implement
pub trait Command {
    /// Execute the command with the given context
    fn execute(&self, context: &CommandContext) -> Result<()>;
}

/// Print `value` as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Turn a remote failure into the command's error
pub(crate) fn remote_failure(action: &str, error: RemoteError) -> anyhow::Error {
    anyhow::anyhow!("Failed to {} ({}): {}", action, error, error.message())
}
