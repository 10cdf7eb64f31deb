//! Central constants for the github-agent application

/// Environment variables read at startup
pub mod env {
    /// GitHub personal access token (required)
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

    /// Credential of the LLM provider driving the agent (required)
    pub const COPILOT_API_KEY: &str = "COPILOT_API_KEY";

    /// Override of the GitHub API base URL
    pub const GITHUB_API_URL: &str = "GITHUB_API_URL";

    /// Override of the LLM provider base URL
    pub const COPILOT_BASE_URL: &str = "COPILOT_BASE_URL";

    /// Override of the model name
    pub const COPILOT_MODEL: &str = "COPILOT_MODEL";
}

/// Default values for the LLM agent
pub mod llm {
    /// OpenAI-compatible endpoint of GitHub Copilot
    pub const DEFAULT_BASE_URL: &str = "https://api.githubcopilot.com/v1";

    /// Model used when none is configured
    pub const DEFAULT_MODEL: &str = "gpt-4";

    /// Sampling temperature; tool selection should be deterministic
    pub const DEFAULT_TEMPERATURE: f32 = 0.0;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "github-agent.yaml";
}
