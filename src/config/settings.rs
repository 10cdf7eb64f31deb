//! Process settings assembled once at startup

use super::loader::FileConfig;
use super::validation;
use crate::constants::{env, llm};
use anyhow::Result;
use github_tools::{Credential, DEFAULT_API_URL, DEFAULT_USER_AGENT, GitHubConfig};
use std::path::Path;

/// Settings of the LLM provider the agent framework talks to
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: Credential,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

/// Everything the process needs, built before any network activity
#[derive(Debug, Clone)]
pub struct Settings {
    pub github: GitHubConfig,
    pub llm: LlmSettings,
}

impl Settings {
    /// Load settings from the process environment and the optional config file
    ///
    /// # Errors
    /// Fails when `GITHUB_TOKEN` or `COPILOT_API_KEY` is missing or blank, when
    /// an explicitly requested config file cannot be read, or when a value is
    /// invalid.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file = FileConfig::load_or_default(
            config_path,
            Path::new(crate::constants::config::DEFAULT_CONFIG_FILE),
        )?;
        Self::from_sources(file, |name| std::env::var(name).ok())
    }

    /// Build settings from a parsed file and an environment lookup
    pub fn from_sources<F>(file: FileConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token =
            validation::validate_credential(env::GITHUB_TOKEN, lookup(env::GITHUB_TOKEN))?;
        let llm_key =
            validation::validate_credential(env::COPILOT_API_KEY, lookup(env::COPILOT_API_KEY))?;

        let api_url = lookup(env::GITHUB_API_URL)
            .or(file.github.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validation::validate_base_url("GitHub API URL", &api_url)?;

        let user_agent = file
            .github
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let base_url = lookup(env::COPILOT_BASE_URL)
            .or(file.llm.base_url)
            .unwrap_or_else(|| llm::DEFAULT_BASE_URL.to_string());
        validation::validate_base_url("LLM base URL", &base_url)?;

        let model = lookup(env::COPILOT_MODEL)
            .or(file.llm.model)
            .unwrap_or_else(|| llm::DEFAULT_MODEL.to_string());
        validation::validate_model(&model)?;

        let temperature = file.llm.temperature.unwrap_or(llm::DEFAULT_TEMPERATURE);
        validation::validate_temperature(temperature)?;

        let github = GitHubConfig::new(Credential::new(github_token))
            .with_api_url(api_url)
            .with_user_agent(user_agent);

        Ok(Self {
            github,
            llm: LlmSettings {
                api_key: Credential::new(llm_key),
                base_url,
                model,
                temperature,
            },
        })
    }
}
