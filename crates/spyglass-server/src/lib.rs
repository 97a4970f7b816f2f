pub mod app_state;
pub mod config;
pub mod handlers;
pub mod render;
pub mod router;
pub mod transport;

/// Server identity reported by `initialize`, `/health` and the landing page.
pub const SERVER_NAME: &str = "spyglass";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVER_DESCRIPTION: &str = "Tavily search MCP gateway";

/// MCP protocol revision the gateway speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";
