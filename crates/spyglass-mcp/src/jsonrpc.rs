use serde::{Deserialize, Serialize};
use serde_json::Value;

use spyglass_core::Error;

/// A JSON-RPC 2.0 request.
///
/// An absent `id` deserializes to `Value::Null`; the response must echo it
/// either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// A JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Create the error response for a protocol-level gateway error.
    pub fn from_error(id: Value, err: &Error) -> Self {
        Self::error(id, error_code(err), err.to_string())
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Standard JSON-RPC error codes.
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// Map a gateway error to its JSON-RPC error code.
///
/// `ToolExecution` is listed for completeness but handlers fold it into the
/// tool's content text before it can reach an error object.
#[must_use]
pub fn error_code(err: &Error) -> i32 {
    match err {
        Error::Parse => PARSE_ERROR,
        Error::MethodNotFound(_) => METHOD_NOT_FOUND,
        Error::UnknownTool(_) | Error::Config(_) | Error::ToolExecution(_) | Error::Internal(_) => {
            INTERNAL_ERROR
        }
    }
}
