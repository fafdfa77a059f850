//! Model Context Protocol surface
//!
//! JSON-RPC 2.0 message types and the request router that exposes the tool
//! catalog to MCP clients.

pub mod messages;
pub mod server;

pub use messages::*;
pub use server::McpServer;
