//! Raw tool invocation command

use super::base::print_json;
use super::{Command, CommandContext};
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use serde_json::Value;

/// Dispatch one tool call exactly as an agent would and print its result
pub struct CallCommand {
    pub tool: String,
    /// JSON object with the tool's arguments
    pub arguments: Option<String>,
}

impl CallCommand {
    fn parse_arguments(&self) -> Result<Value> {
        match self.arguments.as_deref() {
            Some(raw) => serde_json::from_str(raw)
                .with_context(|| format!("Tool arguments are not valid JSON: {}", raw)),
            None => Ok(Value::Null),
        }
    }
}

impl Command for CallCommand {
    fn execute(&self, context: &CommandContext) -> Result<()> {
        let arguments = self.parse_arguments()?;
        let registry = ToolRegistry::new(&context.client);
        let output = registry.invoke(&self.tool, arguments)?;

        print_json(&output.value)?;

        if output.is_error {
            anyhow::bail!("Tool {} returned an error", output.tool);
        }
        Ok(())
    }
}
