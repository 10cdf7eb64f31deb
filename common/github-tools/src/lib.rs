//! GitHub API adapter library
//!
//! This library provides the four GitHub REST adapters exposed to the agent:
//! listing a user's repositories, creating an issue, searching code and
//! fetching repository metadata. Each adapter performs exactly one blocking
//! HTTP call and reshapes the response into a flat record.
//!
//! ## Modules
//!
//! - [`client`]: Client, credential and connection settings
//! - [`error`]: The uniform failure type returned by every adapter
//! - [`issues`]: Issue creation
//! - [`repositories`]: Repository listing and metadata
//! - [`search`]: Code search

mod client;
mod error;
mod issues;
mod repositories;
mod search;

// Re-export public API
pub use client::{Credential, GitHubClient, GitHubConfig};
pub use error::RemoteError;
pub use issues::{IssueResult, IssueState};
pub use repositories::{RepositoryDetail, RepositorySummary};
pub use search::CodeSearchHit;

/// Base URL of the public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type requested on every call
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("github-agent/", env!("CARGO_PKG_VERSION"));

/// Fixed page size of the code search adapter
pub const SEARCH_PAGE_SIZE: usize = 5;
