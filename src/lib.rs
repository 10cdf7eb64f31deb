//! github-agent - GitHub REST tools for LLM agents
//!
//! Wraps the adapters of the `github-tools` crate with startup settings, a
//! tool registry with declared argument schemas, and the manifest an external
//! agent framework binds to.

pub mod agent;
pub mod commands;
pub mod config;
pub mod constants;
pub mod logging;
pub mod tools;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use agent::{Agent, AgentManifest, ToolCall, ToolMessage};
pub use commands::{Command, CommandContext};
pub use config::Settings;
pub use github_tools::{GitHubClient, GitHubConfig, RemoteError};
pub use tools::{ToolKind, ToolOutput, ToolRegistry};
