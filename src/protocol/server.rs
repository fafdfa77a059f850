//! MCP request routing
//!
//! [`McpServer`] answers `initialize`, `ping`, `tools/list` and `tools/call`,
//! accepts notifications silently and drives a [`Transport`] until the peer
//! disconnects.

use crate::config::ServerConfig;
use crate::error::{McpError, McpResult};
use crate::protocol::messages::{
    CallToolParams, CallToolResult, IncomingMessage, InitializeParams, InitializeResult,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, DEFAULT_PROTOCOL_VERSION,
};
use crate::request_span;
use crate::tools::ToolSystem;
use crate::transport::{Transport, TransportError};
use serde_json::Value;
use tracing::{debug, error, info, warn, Instrument};

/// Tool server speaking MCP over any [`Transport`]
pub struct McpServer {
    info: ServerInfo,
    tools: ToolSystem,
}

impl McpServer {
    pub fn new(config: &ServerConfig, tools: ToolSystem) -> Self {
        Self {
            info: ServerInfo {
                name: config.server.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tools,
        }
    }

    /// Read, handle and answer messages until the transport reports end of stream
    pub async fn serve<T: Transport>(&self, transport: &mut T) -> Result<(), TransportError> {
        info!(server = %self.info.name, "MCP server ready on transport");

        while let Some(raw) = transport.receive().await? {
            if let Some(response) = self.handle_raw(&raw).await {
                let encoded = serde_json::to_string(&response)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
                transport.send(&encoded).await?;
            }
        }

        info!("Transport closed by peer");
        Ok(())
    }

    /// Handle one raw frame; invalid JSON yields a parse error response
    pub async fn handle_raw(&self, raw: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => self.handle_message(value).await,
            Err(e) => {
                warn!(error = %e, "Discarding unparseable message");
                Some(JsonRpcResponse::error(
                    Value::Null,
                    &McpError::parse_error(format!("Parse error: {e}")),
                ))
            }
        }
    }

    /// Handle one parsed JSON-RPC message
    pub async fn handle_message(&self, message: Value) -> Option<JsonRpcResponse> {
        let message = match IncomingMessage::from_value(message) {
            Ok(message) => message,
            Err((Some(id), e)) => {
                warn!(error = %e, "Rejecting invalid request");
                return Some(JsonRpcResponse::error(id, &e));
            }
            Err((None, e)) => {
                warn!(error = %e, "Dropping invalid notification");
                return None;
            }
        };

        match message {
            IncomingMessage::Request { id, method, params } => {
                let span = request_span!(method = %method, id = %id);
                let result = self.handle_request(&method, params).instrument(span).await;

                Some(match result {
                    Ok(payload) => JsonRpcResponse::success(id, payload),
                    Err(e) => {
                        error!(method = %method, code = e.code.code(), error = %e, "Request failed");
                        JsonRpcResponse::error(id, &e)
                    }
                })
            }
            IncomingMessage::Notification { method, .. } => {
                debug!(method = %method, "Notification received");
                None
            }
            IncomingMessage::Response { id } => {
                debug!(id = %id, "Ignoring client response");
                None
            }
        }
    }

    async fn handle_request(&self, method: &str, params: Value) -> McpResult<Value> {
        match method {
            "initialize" => to_value(self.initialize(params)?),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_value(self.list_tools()),
            "tools/call" => to_value(self.call_tool(params).await?),
            _ => Err(McpError::method_not_found(format!(
                "Method not found: {method}"
            ))),
        }
    }

    fn initialize(&self, params: Value) -> McpResult<InitializeResult> {
        let params: InitializeParams = if params.is_null() {
            InitializeParams::default()
        } else {
            serde_json::from_value(params)
                .map_err(|e| McpError::invalid_params(format!("Invalid initialize params: {e}")))?
        };

        info!(
            client = ?params.client_info,
            protocol_version = ?params.protocol_version,
            "Client initializing"
        );

        Ok(InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities::default(),
            server_info: self.info.clone(),
        })
    }

    /// Catalog handler
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.tools.list_tools(),
        }
    }

    /// Tool-call handler; params are `{name, arguments}`
    pub async fn call_tool(&self, params: Value) -> McpResult<CallToolResult> {
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|e| McpError::invalid_params(format!("Invalid tools/call params: {e}")))?;

        Ok(self.tools.call_tool(&params.name, &params.arguments).await?)
    }
}

fn to_value<T: serde::Serialize>(value: T) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::internal_error(e.to_string()))
}
