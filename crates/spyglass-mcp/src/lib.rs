pub mod content;
pub mod jsonrpc;
pub mod tools;

pub use content::{ContentBlock, ToolCallResult};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use tools::{ToolDefinition, ToolRegistry};
