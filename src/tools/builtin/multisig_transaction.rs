//! `getMultisigTransaction` tool

use crate::safe::SafeApiClient;
use crate::tools::{arguments, Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;

pub const TOOL_NAME: &str = "getMultisigTransaction";

/// Arguments of `getMultisigTransaction`
#[derive(Debug, Clone, PartialEq)]
pub struct MultisigTransactionArgs {
    pub safe_tx_hash: String,
}

impl MultisigTransactionArgs {
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, ToolError> {
        Ok(Self {
            safe_tx_hash: arguments::required(arguments, "safeTxHash")?,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("/multisig-transactions/{}/", self.safe_tx_hash)
    }
}

/// Fetches a single multisig transaction by its Safe transaction hash
pub struct MultisigTransactionTool {
    client: Arc<SafeApiClient>,
}

impl MultisigTransactionTool {
    pub fn new(client: Arc<SafeApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for MultisigTransactionTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: TOOL_NAME.to_string(),
            description: "Get details of a specific multisig transaction".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "safeTxHash": {
                        "type": "string",
                        "description": "Safe transaction hash"
                    }
                },
                "required": ["safeTxHash"]
            }),
        }
    }

    async fn execute(&self, arguments: &Map<String, Value>) -> Result<Value, ToolError> {
        let args = MultisigTransactionArgs::from_arguments(arguments)?;
        Ok(self.client.fetch(&args.endpoint(), &[]).await?)
    }
}
