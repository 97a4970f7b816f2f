/// Core error type for the spyglass gateway.
///
/// The variants split into two channels: protocol-level failures
/// (`Parse`, `MethodNotFound`, `UnknownTool`, `Config`, `Internal`) become
/// JSON-RPC error objects, while `ToolExecution` is folded into the tool's
/// content text at the handler boundary and never reaches the wire as a
/// protocol error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON request")]
    Parse,

    #[error("unknown method: {0}")]
    MethodNotFound(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    ToolExecution(String),

    #[error("internal error: {0}")]
    Internal(String),
}
