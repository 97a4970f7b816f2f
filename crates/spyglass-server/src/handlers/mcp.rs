use axum::extract::State;
use axum::response::Response;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;

use spyglass_core::time::{TimeFormat, TimeReport};
use spyglass_core::types::SearchRequest;
use spyglass_core::{CredentialPool, Error};
use spyglass_mcp::{JsonRpcRequest, JsonRpcResponse, ToolCallResult, ToolRegistry};

use crate::app_state::AppState;
use crate::{render, transport};

/// Handle a JSON-RPC request on `POST /mcp`.
///
/// The body is taken raw so a malformed payload reaches the dispatcher and
/// becomes a parse error envelope instead of a framework 400. The
/// credential check runs before parsing: without any credential source the
/// gateway cannot serve tool calls at all.
pub async fn mcp_request(State(state): State<AppState>, body: String) -> Response {
    let mode = state.transport;

    if credential_source(&state).is_none() {
        let err = Error::Config("TAVILY_API_KEY is not set".to_string());
        return transport::respond(mode, &JsonRpcResponse::from_error(Value::Null, &err));
    }

    let Ok(req) = serde_json::from_str::<JsonRpcRequest>(&body) else {
        return transport::respond(mode, &JsonRpcResponse::from_error(Value::Null, &Error::Parse));
    };

    tracing::debug!(method = %req.method, "MCP request");

    let response = dispatch(&state, req).await;
    transport::respond(mode, &response)
}

/// Route a parsed request by method.
///
/// Once a method is recognized, every failure inside it is mapped to a
/// JSON-RPC error envelope; nothing escapes as a bare HTTP 500.
async fn dispatch(state: &AppState, req: JsonRpcRequest) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tools_call(state, &req).await,
        other => {
            JsonRpcResponse::from_error(req.id.clone(), &Error::MethodNotFound(other.to_string()))
        }
    }
}

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": crate::PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": crate::SERVER_NAME,
                "version": crate::SERVER_VERSION,
                "description": crate::SERVER_DESCRIPTION,
            }
        }),
    )
}

fn handle_tools_list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = ToolRegistry::definitions();
    JsonRpcResponse::success(req.id.clone(), serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = &req.params else {
        return JsonRpcResponse::from_error(
            req.id.clone(),
            &Error::Internal("missing params for tools/call".to_string()),
        );
    };

    let tool_name = params
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()));

    let result = match tool_name {
        "tavily_search" => tool_search(state, arguments).await,
        "tavily_extract" => tool_extract(state, arguments).await,
        "get_current_time" => tool_current_time(arguments),
        other => {
            return JsonRpcResponse::from_error(
                req.id.clone(),
                &Error::UnknownTool(other.to_string()),
            )
        }
    };

    match serde_json::to_value(&result) {
        Ok(value) => JsonRpcResponse::success(req.id.clone(), value),
        Err(e) => JsonRpcResponse::from_error(req.id.clone(), &Error::Internal(e.to_string())),
    }
}

/// Search the web through the downstream service.
///
/// Like every tool handler, failures stop here: the JSON-RPC layer sees a
/// success envelope whose text carries the failure description.
async fn tool_search(state: &AppState, args: Value) -> ToolCallResult {
    match run_search(state, args).await {
        Ok(text) => ToolCallResult::text(text),
        Err(e) => ToolCallResult::text(format!("❌ Search failed: {e}")),
    }
}

async fn run_search(state: &AppState, args: Value) -> Result<String, Error> {
    let args: SearchArgs = parse_args(args)?;
    let api_key = select_key(state)?;

    let request = SearchRequest {
        query: args.query,
        max_results: args.max_results,
        search_depth: args.search_depth,
        include_domains: args.include_domains,
        exclude_domains: args.exclude_domains,
    };

    let outcome = state.tavily.search(&api_key, &request).await?;
    Ok(render::search_results(&request.query, &outcome))
}

async fn tool_extract(state: &AppState, args: Value) -> ToolCallResult {
    match run_extract(state, args).await {
        Ok(text) => ToolCallResult::text(text),
        Err(e) => ToolCallResult::text(format!("❌ Extraction failed: {e}")),
    }
}

async fn run_extract(state: &AppState, args: Value) -> Result<String, Error> {
    let args: ExtractArgs = parse_args(args)?;
    let api_key = select_key(state)?;

    let hits = state.tavily.extract(&api_key, &args.urls).await?;
    Ok(render::extract_results(&hits))
}

fn tool_current_time(args: Value) -> ToolCallResult {
    match parse_args::<TimeArgs>(args) {
        Ok(args) => {
            let report = TimeReport::compute(Utc::now(), &args.timezone, args.format);
            ToolCallResult::text(render::current_time(&report))
        }
        Err(e) => ToolCallResult::text(format!("❌ Time lookup failed: {e}")),
    }
}

#[derive(serde::Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default = "default_max_results")]
    max_results: u32,
    #[serde(default)]
    search_depth: spyglass_core::SearchDepth,
    #[serde(default)]
    include_domains: Option<Vec<String>>,
    #[serde(default)]
    exclude_domains: Option<Vec<String>>,
}

fn default_max_results() -> u32 {
    5
}

#[derive(serde::Deserialize)]
struct ExtractArgs {
    urls: Vec<String>,
}

#[derive(serde::Deserialize)]
struct TimeArgs {
    #[serde(default = "default_timezone")]
    timezone: String,
    #[serde(default)]
    format: TimeFormat,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, Error> {
    serde_json::from_value(args).map_err(|e| Error::ToolExecution(format!("invalid arguments: {e}")))
}

/// The raw credential source, or `None` when unset or blank.
fn credential_source(state: &AppState) -> Option<&str> {
    state
        .api_keys
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Rebuild the pool from configuration and draw one key.
///
/// A source that parses to an empty pool (separators only) fails here,
/// inside the tool handler, and lands in the content-text channel.
fn select_key(state: &AppState) -> Result<String, Error> {
    let raw = state.api_keys.as_deref().unwrap_or_default();
    let pool = CredentialPool::parse(raw)?;
    Ok(pool.pick(&mut rand::thread_rng()).to_string())
}
