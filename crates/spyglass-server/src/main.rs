use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use spyglass_server::app_state::AppState;
use spyglass_server::config::Config;
use spyglass_server::router;
use spyglass_tavily::TavilyClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    if config
        .api_keys
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .is_empty()
    {
        tracing::warn!("TAVILY_API_KEY is not set; tool calls will be rejected");
    }

    let tavily = TavilyClient::new(config.tavily_url.as_str(), config.downstream_timeout)
        .expect("Failed to build Tavily client");

    let state = AppState {
        tavily: Arc::new(tavily),
        api_keys: config.api_keys.clone(),
        transport: config.transport,
    };

    let app = router::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!(
        "Spyglass gateway listening on {addr} ({:?} transport)",
        config.transport
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server error");
}
