use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use spyglass_mcp::JsonRpcResponse;

/// How the gateway frames outgoing JSON-RPC envelopes.
///
/// Picked once at startup from configuration; the two variants are
/// mutually exclusive deployment modes, not negotiated per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// A single SSE-style frame: `data: <json>\n\n` with
    /// `Content-Type: text/event-stream`.
    EventStream,
    /// A plain JSON body with `Content-Type: application/json`.
    Json,
}

/// Render the final envelope as an HTTP response in the given mode.
pub fn respond(mode: TransportMode, response: &JsonRpcResponse) -> Response {
    match mode {
        TransportMode::EventStream => {
            let payload = serde_json::to_string(response).unwrap_or_default();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/event-stream"),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                format!("data: {payload}\n\n"),
            )
                .into_response()
        }
        TransportMode::Json => Json(response).into_response(),
    }
}
