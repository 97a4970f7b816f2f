use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Informational pages
        .route("/", get(handlers::landing))
        .route("/health", get(handlers::health))
        // JSON-RPC entry point
        .route("/mcp", post(handlers::mcp_request))
        // CORS: allow any origin (MCP clients run in assorted contexts)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
