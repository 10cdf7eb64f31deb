//! Configuration validation utilities

use anyhow::{Result, bail};

/// Reject missing or blank credentials
pub fn validate_credential(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => bail!("{} environment variable is empty", name),
        None => bail!("{} environment variable is not set", name),
    }
}

/// Base URLs must be absolute http(s) URLs
pub fn validate_base_url(name: &str, url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        bail!("{} must be an http(s) URL, got '{}'", name, url);
    }
    Ok(())
}

pub fn validate_model(model: &str) -> Result<()> {
    if model.trim().is_empty() {
        bail!("LLM model name cannot be empty");
    }
    Ok(())
}

pub fn validate_temperature(temperature: f32) -> Result<()> {
    if !(0.0..=2.0).contains(&temperature) {
        bail!(
            "LLM temperature must be between 0.0 and 2.0, got {}",
            temperature
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_validation() {
        assert_eq!(
            validate_credential("GITHUB_TOKEN", Some("ghp_abc".to_string())).unwrap(),
            "ghp_abc"
        );

        let missing = validate_credential("GITHUB_TOKEN", None).unwrap_err();
        assert!(missing.to_string().contains("GITHUB_TOKEN"));
        assert!(missing.to_string().contains("not set"));

        let blank = validate_credential("COPILOT_API_KEY", Some("   ".to_string())).unwrap_err();
        assert!(blank.to_string().contains("empty"));
    }

    #[test]
    fn test_base_url_validation() {
        assert!(validate_base_url("api_url", "https://api.github.com").is_ok());
        assert!(validate_base_url("api_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_base_url("api_url", "api.github.com").is_err());
        assert!(validate_base_url("api_url", "").is_err());
    }

    #[test]
    fn test_model_and_temperature_validation() {
        assert!(validate_model("gpt-4").is_ok());
        assert!(validate_model(" ").is_err());
        assert!(validate_temperature(0.0).is_ok());
        assert!(validate_temperature(2.0).is_ok());
        assert!(validate_temperature(-0.1).is_err());
        assert!(validate_temperature(2.5).is_err());
    }
}
