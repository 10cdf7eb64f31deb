//! Code search command

use super::base::{print_json, remote_failure};
use super::{Command, CommandContext};
use anyhow::Result;
use colored::*;

pub struct SearchCommand {
    pub query: String,
    pub json: bool,
}

impl Command for SearchCommand {
    fn execute(&self, context: &CommandContext) -> Result<()> {
        let hits = context
            .client
            .search_code(&self.query)
            .map_err(|e| remote_failure(&format!("search code for '{}'", self.query), e))?;

        if self.json {
            return print_json(&hits);
        }

        if hits.is_empty() {
            println!("{}", format!("No code found for '{}'", self.query).yellow());
            return Ok(());
        }

        for hit in &hits {
            println!(
                "{} {} {}",
                "•".blue(),
                hit.repository_full_name.cyan(),
                hit.path.bold()
            );
            println!("  {}", hit.url);
        }

        Ok(())
    }
}
