//! Transport layer for MCP messages
//!
//! This module provides the transport abstraction and the stdio
//! implementation used when the server is launched by an MCP client.

use thiserror::Error;

pub mod stdio;

pub use stdio::StdioTransport;

/// Transport trait for JSON-RPC message exchange
///
/// A transport moves whole serialized messages; framing is its concern,
/// parsing is not. This keeps the server loop testable over in-memory pipes.
#[async_trait::async_trait]
pub trait Transport: Send {
    /// Receive the next message, `None` once the peer has closed the stream
    async fn receive(&mut self) -> Result<Option<String>, TransportError>;

    /// Send one serialized message
    async fn send(&mut self, message: &str) -> Result<(), TransportError>;

    /// Flush and close the outgoing side
    async fn close(&mut self) -> Result<(), TransportError>;

    /// Check if the transport has been closed
    fn is_closed(&self) -> bool;
}

/// Transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Transport is closed")]
    Closed,
}
