//! `getSafeTransactions` tool
//!
//! Lists all transactions of a Safe, newest first.

use crate::safe::SafeApiClient;
use crate::tools::{arguments, Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;

pub const TOOL_NAME: &str = "getSafeTransactions";

const DEFAULT_LIMIT: u64 = 100;
const DEFAULT_OFFSET: u64 = 0;
const ORDERING: &str = "-timestamp";

/// Arguments of `getSafeTransactions`
#[derive(Debug, Clone, PartialEq)]
pub struct SafeTransactionsArgs {
    pub address: String,
    pub limit: String,
    pub offset: String,
}

impl SafeTransactionsArgs {
    /// Parse from a raw argument map (pure function)
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, ToolError> {
        Ok(Self {
            address: arguments::required(arguments, "address")?,
            limit: arguments::with_default(arguments, "limit", DEFAULT_LIMIT),
            offset: arguments::with_default(arguments, "offset", DEFAULT_OFFSET),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("/safes/{}/all-transactions/", self.address)
    }

    /// Query parameters in wire order
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.clone()),
            ("offset", self.offset.clone()),
            ("ordering", ORDERING.to_string()),
        ]
    }
}

/// Lists transactions for a Safe address
pub struct SafeTransactionsTool {
    client: Arc<SafeApiClient>,
}

impl SafeTransactionsTool {
    pub fn new(client: Arc<SafeApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SafeTransactionsTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: TOOL_NAME.to_string(),
            description: "Get all transactions for a Safe address".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "address": {
                        "type": "string",
                        "description": "Safe address"
                    },
                    "limit": {
                        "type": "number",
                        "description": "Number of transactions to return"
                    },
                    "offset": {
                        "type": "number",
                        "description": "Offset for pagination"
                    }
                },
                "required": ["address"]
            }),
        }
    }

    async fn execute(&self, arguments: &Map<String, Value>) -> Result<Value, ToolError> {
        let args = SafeTransactionsArgs::from_arguments(arguments)?;
        Ok(self.client.fetch(&args.endpoint(), &args.query()).await?)
    }
}
