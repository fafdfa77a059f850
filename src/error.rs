//! JSON-RPC error types for the Safe MCP server
//!
//! Every failure that reaches the caller is an [`McpError`]: a JSON-RPC error
//! code plus a human-readable message. Lower layers keep their own typed
//! errors and are mapped here at the protocol boundary.

use crate::tools::ToolError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON-RPC 2.0 error codes used by MCP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
}

impl ErrorCode {
    /// Numeric code as sent on the wire
    pub fn code(self) -> i32 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
        }
    }
}

/// Typed failure surfaced to the MCP caller
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct McpError {
    pub code: ErrorCode,
    pub message: String,
}

/// Error object of a JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

impl McpError {
    pub fn new<S: Into<String>>(code: ErrorCode, message: S) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create parse error
    pub fn parse_error<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorCode::ParseError, message)
    }

    /// Create invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Create method not found error
    pub fn method_not_found<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorCode::MethodNotFound, message)
    }

    /// Create invalid params error
    pub fn invalid_params<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorCode::InvalidParams, message)
    }

    /// Create internal error
    pub fn internal_error<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Convert into the wire-level error object
    pub fn to_error_object(&self) -> ErrorObject {
        ErrorObject {
            code: self.code.code(),
            message: self.message.clone(),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(error: ToolError) -> Self {
        let code = match &error {
            ToolError::UnknownTool(_) => ErrorCode::MethodNotFound,
            ToolError::MissingArgument(_)
            | ToolError::InvalidArguments(_)
            | ToolError::InvalidData => ErrorCode::InvalidParams,
            ToolError::SelectorNotFound | ToolError::Api(_) | ToolError::Serialization(_) => {
                ErrorCode::InternalError
            }
        };

        McpError::new(code, error.to_string())
    }
}

/// Result type for protocol-level operations
pub type McpResult<T> = Result<T, McpError>;
