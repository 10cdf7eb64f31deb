//! Repository information command

use super::base::{print_json, remote_failure};
use super::{Command, CommandContext};
use anyhow::Result;
use colored::*;

/// Show metadata of a single repository
pub struct InfoCommand {
    pub owner: String,
    pub repo: String,
    pub json: bool,
}

impl Command for InfoCommand {
    fn execute(&self, context: &CommandContext) -> Result<()> {
        let detail = context
            .client
            .get_repository_info(&self.owner, &self.repo)
            .map_err(|e| {
                remote_failure(
                    &format!("get repository information for {}/{}", self.owner, self.repo),
                    e,
                )
            })?;

        if self.json {
            return print_json(&detail);
        }

        let summary = &detail.summary;
        println!("{}/{}", self.owner.cyan(), summary.name.cyan().bold());
        if let Some(description) = &summary.description {
            println!("  {}", description);
        }
        println!("  URL: {}", summary.url);
        println!(
            "  Language: {}",
            summary.language.as_deref().unwrap_or("unknown")
        );
        println!(
            "  Stars: {}  Forks: {}  Open issues: {}",
            summary.star_count.to_string().yellow(),
            detail.fork_count,
            detail.open_issue_count
        );
        println!("  Created: {}", detail.created_at.to_rfc3339());
        println!("  Updated: {}", summary.updated_at.to_rfc3339());

        Ok(())
    }
}
