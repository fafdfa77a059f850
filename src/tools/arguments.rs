//! Argument extraction helpers
//!
//! Only presence is checked locally. Scalar values are stringified so the
//! remote API decides whether `"10"`, `10` or `"0xABC"` is acceptable.

use crate::tools::ToolError;
use serde_json::{Map, Value};

/// Unwrap the `arguments` of a tool call; absent or `null` means no arguments
pub fn as_object(arguments: &Value) -> Result<Map<String, Value>, ToolError> {
    match arguments {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map.clone()),
        other => Err(ToolError::InvalidArguments(format!(
            "expected an object, got {}",
            value_kind(other)
        ))),
    }
}

/// Required argument as a string; missing and `null` are both absent
pub fn required(arguments: &Map<String, Value>, name: &str) -> Result<String, ToolError> {
    optional(arguments, name).ok_or_else(|| ToolError::MissingArgument(name.to_string()))
}

/// Optional argument as a string
pub fn optional(arguments: &Map<String, Value>, name: &str) -> Option<String> {
    arguments.get(name).and_then(stringify)
}

/// Optional argument with a fallback
pub fn with_default(arguments: &Map<String, Value>, name: &str, default: u64) -> String {
    optional(arguments, name).unwrap_or_else(|| default.to_string())
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
