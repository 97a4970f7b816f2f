use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definition of a tool exposed to MCP clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Registry of all tools the gateway exposes.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the MCP `tools/list` method.
    ///
    /// The order is the registration order and is stable across calls.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "tavily_search".to_string(),
                description: "Search the web with the Tavily API.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query"
                        },
                        "max_results": {
                            "type": "number",
                            "description": "Maximum number of results to return (default 5)",
                            "default": 5
                        },
                        "search_depth": {
                            "type": "string",
                            "enum": ["basic", "advanced"],
                            "description": "Search depth (default basic)",
                            "default": "basic"
                        },
                        "include_domains": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Only include results from these domains"
                        },
                        "exclude_domains": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Exclude results from these domains"
                        }
                    },
                    "required": ["query"]
                }),
            },
            ToolDefinition {
                name: "tavily_extract".to_string(),
                description: "Extract page content from a list of URLs.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "urls": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "URLs to extract content from"
                        }
                    },
                    "required": ["urls"]
                }),
            },
            ToolDefinition {
                name: "get_current_time".to_string(),
                description: "Get the current time in a given timezone and format.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "timezone": {
                            "type": "string",
                            "description": "IANA timezone name (default UTC)",
                            "default": "UTC"
                        },
                        "format": {
                            "type": "string",
                            "enum": ["iso", "chinese", "us", "timestamp"],
                            "description": "Output format (default iso)",
                            "default": "iso"
                        }
                    },
                    "required": []
                }),
            },
        ]
    }
}
