//! Configuration file loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `github` section of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitHubSection {
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
}

/// `llm` section of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LlmSection {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

/// Optional YAML configuration file
///
/// Holds no secrets; tokens are only ever read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub github: GitHubSection,
    pub llm: LlmSection,
}

impl FileConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: FileConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Load `path` when given, otherwise the default file if it exists
    ///
    /// An explicitly requested file must exist. A missing default file
    /// yields the empty configuration.
    pub fn load_or_default(path: Option<&Path>, default_path: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if default_path.exists() => Self::load(default_path),
            None => Ok(Self::default()),
        }
    }
}
