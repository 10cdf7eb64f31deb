//! Agent manifest command

use super::base::print_json;
use super::{Command, CommandContext};
use crate::agent::Agent;
use crate::tools::ToolRegistry;
use anyhow::Result;

/// Print the model settings and tool definitions an agent framework binds to
pub struct ToolsCommand;

impl Command for ToolsCommand {
    fn execute(&self, context: &CommandContext) -> Result<()> {
        let agent = Agent::new(&context.settings.llm, ToolRegistry::new(&context.client));
        print_json(&agent.manifest())
    }
}
