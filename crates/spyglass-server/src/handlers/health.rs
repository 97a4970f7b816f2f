use axum::Json;
use chrono::Utc;

/// Liveness descriptor.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "server": {
            "name": crate::SERVER_NAME,
            "version": crate::SERVER_VERSION,
            "description": crate::SERVER_DESCRIPTION,
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
