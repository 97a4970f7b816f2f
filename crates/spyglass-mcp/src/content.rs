use serde::{Deserialize, Serialize};

/// The uniform `{type, text}` unit carrying all tool output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Result shape for `tools/call`.
///
/// This is the only shape a tool produces, success or failure: a failed
/// tool still answers with a nominally successful result whose text carries
/// the failure description. Protocol-level errors are the dispatcher's
/// business, not the tools'.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub content: Vec<ContentBlock>,
}

impl ToolCallResult {
    /// A result with a single text content block.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock {
                kind: "text".to_string(),
                text: text.into(),
            }],
        }
    }
}
