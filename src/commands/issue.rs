//! Issue creation command

use super::base::{print_json, remote_failure};
use super::{Command, CommandContext};
use anyhow::Result;
use colored::*;

/// Create an issue; not idempotent
pub struct IssueCommand {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: String,
    pub json: bool,
}

impl Command for IssueCommand {
    fn execute(&self, context: &CommandContext) -> Result<()> {
        let issue = context
            .client
            .create_issue(&self.owner, &self.repo, &self.title, &self.body)
            .map_err(|e| {
                remote_failure(
                    &format!("create issue in {}/{}", self.owner, self.repo),
                    e,
                )
            })?;

        if self.json {
            return print_json(&issue);
        }

        println!(
            "{} | {} #{} {}",
            format!("{}/{}", self.owner, self.repo).cyan().bold(),
            "Issue created:".green(),
            issue.number,
            issue.url
        );

        Ok(())
    }
}
