//! JSON-RPC 2.0 and MCP message types
//!
//! Incoming messages are classified from raw JSON so that a missing `id`
//! (notification) can be told apart from any id value, including `null`.

use crate::error::{ErrorObject, McpError};
use crate::tools::ToolDescription;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC version string
pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol version answered when the client does not request one
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// A classified incoming JSON-RPC message
#[derive(Debug, Clone, PartialEq)]
pub enum IncomingMessage {
    /// Request expecting a response
    Request {
        id: Value,
        method: String,
        params: Value,
    },
    /// Notification, never answered
    Notification { method: String, params: Value },
    /// Response to a server-initiated request; this server sends none, so these are dropped
    Response { id: Value },
}

impl IncomingMessage {
    /// Classify a parsed JSON value
    ///
    /// Errors carry the id to answer with. `None` marks a malformed
    /// notification, which must not be answered.
    pub fn from_value(value: Value) -> Result<Self, (Option<Value>, McpError)> {
        let Value::Object(mut obj) = value else {
            return Err((
                Some(Value::Null),
                McpError::invalid_request("Request must be a JSON object"),
            ));
        };

        let id = obj.remove("id");
        let method = obj.remove("method");

        if obj.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
            let reply_id = match (&id, &method) {
                (None, Some(_)) => None,
                (id, _) => Some(id.clone().unwrap_or(Value::Null)),
            };
            return Err((reply_id, McpError::invalid_request("jsonrpc must be '2.0'")));
        }

        let params = obj.remove("params").unwrap_or(Value::Null);
        let method = match method {
            Some(Value::String(method)) => method,
            Some(_) => {
                return Err((
                    Some(id.unwrap_or(Value::Null)),
                    McpError::invalid_request("method must be a string"),
                ))
            }
            None => {
                let is_response = obj.contains_key("result") || obj.contains_key("error");
                return match id {
                    Some(id) if is_response => Ok(IncomingMessage::Response { id }),
                    id => Err((
                        Some(id.unwrap_or(Value::Null)),
                        McpError::invalid_request("Missing method"),
                    )),
                };
            }
        };

        Ok(match id {
            Some(id) => IncomingMessage::Request { id, method, params },
            None => IncomingMessage::Notification { method, params },
        })
    }
}

/// JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, error: &McpError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error.to_error_object()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Params of `initialize`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    #[serde(default)]
    pub protocol_version: Option<String>,
    #[serde(default)]
    pub client_info: Option<Value>,
}

/// Result of `initialize`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

/// Capabilities advertised by this server; tools only
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerCapabilities {
    pub tools: Map<String, Value>,
}

/// Server name and version
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Result of `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDescription>,
}

/// Params of `tools/call`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Result of `tools/call`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallToolResult {
    pub content: Vec<Content>,
}

impl CallToolResult {
    /// Single text block result
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
        }
    }

    /// Text of the first text block
    pub fn text(&self) -> Option<&str> {
        self.content.iter().find_map(|content| match content {
            Content::Text { text } => Some(text.as_str()),
        })
    }
}

/// Content block of a tool result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}
