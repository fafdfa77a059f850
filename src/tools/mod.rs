//! Tool catalog and dispatch for the Safe MCP server
//!
//! Each tool describes itself with a JSON input schema and turns its raw
//! argument map into a typed structure before doing any I/O. [`ToolSystem`]
//! keeps the catalog in registration order and dispatches calls by name.

use crate::protocol::messages::CallToolResult;
use crate::safe::{SafeApiClient, SafeApiError};
use crate::tool_span;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, Instrument};

pub mod arguments;
pub mod builtin;

/// A single invocable operation
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name, description and input schema advertised in `tools/list`
    fn describe(&self) -> ToolDescription;

    /// Run the tool against already-unwrapped arguments.
    /// Returns the JSON payload to be rendered as text.
    async fn execute(&self, arguments: &Map<String, Value>) -> Result<Value, ToolError>;
}

/// Tool description as listed to MCP clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDescription {
    /// Names listed under the schema's `required` key
    pub fn required_arguments(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|required| required.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Tool registry and dispatcher
pub struct ToolSystem {
    tools: HashMap<String, Box<dyn Tool>>,
    order: Vec<String>,
}

impl ToolSystem {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Registry holding the three Safe tools, in catalog order
    pub fn with_safe_tools(client: SafeApiClient) -> Self {
        let client = Arc::new(client);
        let mut system = Self::new();

        system.register(Box::new(builtin::SafeTransactionsTool::new(client.clone())));
        system.register(Box::new(builtin::MultisigTransactionTool::new(
            client.clone(),
        )));
        system.register(Box::new(builtin::DecodeDataTool::new(client)));

        system
    }

    /// Add a tool; a tool with the same name replaces the earlier one in place
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.describe().name;
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    /// Catalog of registered tools, in registration order
    pub fn list_tools(&self) -> Vec<ToolDescription> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.describe())
            .collect()
    }

    /// Get tool description
    pub fn describe_tool(&self, tool_name: &str) -> Option<ToolDescription> {
        self.tools.get(tool_name).map(|tool| tool.describe())
    }

    /// Dispatch a tool call and wrap its JSON result as pretty-printed text
    pub async fn call_tool(
        &self,
        tool_name: &str,
        arguments: &Value,
    ) -> Result<CallToolResult, ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        let arguments = arguments::as_object(arguments)?;

        let span = tool_span!(tool = tool_name);
        let payload = async {
            debug!(argument_count = arguments.len(), "Executing tool");
            tool.execute(&arguments).await
        }
        .instrument(span)
        .await?;

        Ok(CallToolResult::from_text(render_text(&payload)?))
    }
}

impl Default for ToolSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty-print a JSON payload with 2-space indentation (pure function)
pub fn render_text(payload: &Value) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(payload)?)
}

/// Tool dispatch and execution errors
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Cannot find function selector")]
    SelectorNotFound,
    #[error("Invalid data")]
    InvalidData,
    #[error(transparent)]
    Api(#[from] SafeApiError),
    #[error("Failed to serialize tool result: {0}")]
    Serialization(#[from] serde_json::Error),
}
