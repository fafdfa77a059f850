//! `decodeTransactionData` tool
//!
//! Decodes call-data through the Safe `/data-decoder/` endpoint. A 404 means
//! the function selector is unknown to the service; a 422 means the payload
//! itself was rejected.

use crate::safe::{DecodeRequest, SafeApiClient, SafeApiError};
use crate::tools::{arguments, Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Map, Value};
use std::sync::Arc;

pub const TOOL_NAME: &str = "decodeTransactionData";

/// Arguments of `decodeTransactionData`
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeDataArgs {
    pub data: String,
    pub to: Option<String>,
}

impl DecodeDataArgs {
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, ToolError> {
        Ok(Self {
            data: arguments::required(arguments, "data")?,
            to: arguments::optional(arguments, "to"),
        })
    }

    pub fn into_request(self) -> DecodeRequest {
        DecodeRequest {
            data: self.data,
            to: self.to,
        }
    }
}

/// Map decoder failures to tool errors; statuses are checked 404, then 422 (pure function)
fn map_decoder_error(error: SafeApiError) -> ToolError {
    match error.status() {
        Some(StatusCode::NOT_FOUND) => ToolError::SelectorNotFound,
        Some(StatusCode::UNPROCESSABLE_ENTITY) => ToolError::InvalidData,
        _ => ToolError::Api(error),
    }
}

/// Decodes transaction call-data
pub struct DecodeDataTool {
    client: Arc<SafeApiClient>,
}

impl DecodeDataTool {
    pub fn new(client: Arc<SafeApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for DecodeDataTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: TOOL_NAME.to_string(),
            description: "Decode transaction data using Safe API".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "data": {
                        "type": "string",
                        "description": "Transaction data in hex format"
                    },
                    "to": {
                        "type": "string",
                        "description": "Optional contract address"
                    }
                },
                "required": ["data"]
            }),
        }
    }

    async fn execute(&self, arguments: &Map<String, Value>) -> Result<Value, ToolError> {
        let request = DecodeDataArgs::from_arguments(arguments)?.into_request();

        self.client
            .decode_data(&request)
            .await
            .map_err(map_decoder_error)
    }
}
