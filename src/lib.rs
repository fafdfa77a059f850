//! Safe MCP - Rust Implementation
//!
//! A Model Context Protocol server exposing read-only tools for the Safe
//! multi-signature wallet transaction service.
//!
//! # Overview
//!
//! This crate provides:
//! - A Safe transaction service client (`safe`)
//! - The tool catalog and dispatcher (`tools`)
//! - JSON-RPC/MCP message handling (`protocol`)
//! - A newline-delimited stdio transport (`transport`)
//!
//! # Quick Start
//!
//! ```rust
//! use safe_mcp::{SafeApiClient, ServerConfig, ToolSystem};
//!
//! let config = ServerConfig::default();
//! let client = SafeApiClient::from_config(&config).unwrap();
//! let tools = ToolSystem::with_safe_tools(client);
//!
//! let names: Vec<String> = tools.list_tools().into_iter().map(|t| t.name).collect();
//! assert_eq!(
//!     names,
//!     ["getSafeTransactions", "getMultisigTransaction", "decodeTransactionData"]
//! );
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod protocol;
pub mod safe;
pub mod tools;
pub mod transport;

pub use config::{ConfigError, ServerConfig};
pub use error::{ErrorCode, McpError, McpResult};
pub use protocol::{CallToolResult, McpServer};
pub use safe::{SafeApiClient, SafeApiError};
pub use tools::{Tool, ToolDescription, ToolError, ToolSystem};
pub use transport::{StdioTransport, Transport, TransportError};
