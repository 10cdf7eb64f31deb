//! Binding between the GitHub tools and an external LLM agent framework
//!
//! The agent loop itself (prompting, tool selection, conversation) belongs to
//! the framework. This module only describes what the framework needs:
//! the model settings, the tool definitions in OpenAI function-calling
//! format, and a way to answer one tool call with one tool message.

use crate::config::LlmSettings;
use crate::tools::{ToolDefinition, ToolRegistry};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A tool in OpenAI function-calling format
///
/// `read_only` and `idempotent` are hints for the framework and are not part
/// of the provider's function schema.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionTool {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: FunctionSpec,
    pub read_only: bool,
    pub idempotent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

impl From<ToolDefinition> for FunctionTool {
    fn from(definition: ToolDefinition) -> Self {
        Self {
            kind: "function",
            function: FunctionSpec {
                name: definition.name,
                description: definition.description,
                parameters: definition.parameters,
            },
            read_only: definition.read_only,
            idempotent: definition.idempotent,
        }
    }
}

/// What an agent framework needs to drive the tools
///
/// Never carries the provider credential; the framework reads it from
/// [`LlmSettings`].
#[derive(Debug, Clone, Serialize)]
pub struct AgentManifest {
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub tools: Vec<FunctionTool>,
}

/// A tool call requested by the model
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded arguments, as sent by OpenAI-compatible providers
    #[serde(default)]
    pub arguments: String,
}

/// Reply to a [`ToolCall`], ready to append to the conversation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolMessage {
    pub role: &'static str,
    pub tool_call_id: String,
    pub content: String,
}

pub struct Agent<'a> {
    settings: &'a LlmSettings,
    registry: ToolRegistry<'a>,
}

impl<'a> Agent<'a> {
    pub fn new(settings: &'a LlmSettings, registry: ToolRegistry<'a>) -> Self {
        Self { settings, registry }
    }

    pub fn settings(&self) -> &LlmSettings {
        self.settings
    }

    pub fn manifest(&self) -> AgentManifest {
        AgentManifest {
            model: self.settings.model.clone(),
            temperature: self.settings.temperature,
            base_url: self.settings.base_url.clone(),
            tools: self
                .registry
                .definitions()
                .into_iter()
                .map(FunctionTool::from)
                .collect(),
        }
    }

    /// Execute one tool call and wrap its result for the model
    ///
    /// Dispatch failures (unknown tool, malformed arguments) are reported to
    /// the model as an `error` object instead of aborting the conversation.
    pub fn answer_tool_call(&self, call: &ToolCall) -> ToolMessage {
        let content = match self.dispatch(call) {
            Ok(value) => value.to_string(),
            Err(message) => json!({ "error": message }).to_string(),
        };

        ToolMessage {
            role: "tool",
            tool_call_id: call.id.clone(),
            content,
        }
    }

    fn dispatch(&self, call: &ToolCall) -> Result<Value, String> {
        let arguments = if call.function.arguments.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&call.function.arguments)
                .map_err(|e| format!("arguments are not valid JSON: {}", e))?
        };

        self.registry
            .invoke(&call.function.name, arguments)
            .map(|output| output.value)
            .map_err(|e| e.to_string())
    }
}
