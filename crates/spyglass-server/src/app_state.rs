use std::sync::Arc;

use spyglass_core::traits::TavilyApi;

use crate::transport::TransportMode;

/// Shared application state with injected dependencies.
///
/// Everything here is read-only after startup; concurrent requests share
/// nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub tavily: Arc<dyn TavilyApi>,
    /// Raw `TAVILY_API_KEY` value. Parsed into a credential pool on every
    /// call rather than cached.
    pub api_keys: Option<String>,
    pub transport: TransportMode,
}
