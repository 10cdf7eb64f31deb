//! Configuration management module
//!
//! Credentials come from the environment only. Non-secret values may also be
//! read from an optional YAML file; environment overrides win over the file,
//! which wins over built-in defaults.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{FileConfig, GitHubSection, LlmSection};
pub use settings::{LlmSettings, Settings};
