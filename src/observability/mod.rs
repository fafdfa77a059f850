//! Observability for the Safe MCP server
//!
//! Structured logging to stderr; stdout is reserved for protocol traffic.

pub mod logging;

// Re-export for convenience
pub use logging::{init_default_logging, init_logging, LogFormat};

// Span macros for structured logging
pub use logging::{request_span, tool_span};
