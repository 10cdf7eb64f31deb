//! Repository listing command

use super::base::{print_json, remote_failure};
use super::{Command, CommandContext};
use anyhow::Result;
use colored::*;

/// List a user's repositories
pub struct ReposCommand {
    pub username: String,
    /// Output in JSON format
    pub json: bool,
}

impl Command for ReposCommand {
    fn execute(&self, context: &CommandContext) -> Result<()> {
        let repositories = context
            .client
            .list_user_repositories(&self.username)
            .map_err(|e| {
                remote_failure(&format!("list repositories for '{}'", self.username), e)
            })?;

        if self.json {
            return print_json(&repositories);
        }

        if repositories.is_empty() {
            println!(
                "{}",
                format!("No repositories found for {}", self.username).yellow()
            );
            return Ok(());
        }

        println!(
            "{}",
            format!(
                "Found {} repositories for {}",
                repositories.len(),
                self.username
            )
            .green()
        );
        println!();

        for repo in &repositories {
            println!(
                "{} {} {}",
                "•".blue(),
                repo.name.bold(),
                format!("★ {}", repo.star_count).yellow()
            );
            println!("  URL: {}", repo.url);

            if let Some(language) = &repo.language {
                println!("  Language: {}", language.cyan());
            }

            if let Some(description) = &repo.description {
                println!("  Description: {}", description);
            }

            println!("  Updated: {}", repo.updated_at.to_rfc3339());
            println!();
        }

        Ok(())
    }
}
