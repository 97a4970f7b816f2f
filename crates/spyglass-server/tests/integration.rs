use std::sync::Arc;

use axum_test::TestServer;

use spyglass_core::types::{ExtractHit, SearchOutcome};
use spyglass_server::app_state::AppState;
use spyglass_server::transport::TransportMode;

use mock_api::{sample_hit, MockTavilyApi};

const TEST_KEYS: &str = "tvly-test-key";

fn build_test_app(
    mock: Arc<MockTavilyApi>,
    api_keys: Option<&str>,
    transport: TransportMode,
) -> TestServer {
    let state = AppState {
        tavily: mock,
        api_keys: api_keys.map(String::from),
        transport,
    };

    let app = spyglass_server::router::create_router(state);
    TestServer::new(app).unwrap()
}

/// JSON-transport app with a single test key, enough for most tests.
fn default_app(mock: Arc<MockTavilyApi>) -> TestServer {
    build_test_app(mock, Some(TEST_KEYS), TransportMode::Json)
}

fn call_tool(name: &str, arguments: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

#[tokio::test]
async fn health_check() {
    let server = default_app(Arc::new(MockTavilyApi::new()));
    let resp = server.get("/health").await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["server"]["name"], "spyglass");
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn landing_page_lists_tools() {
    let server = default_app(Arc::new(MockTavilyApi::new()));
    let resp = server.get("/").await;

    resp.assert_status_ok();
    let html = resp.text();
    assert!(html.contains("tavily_search"));
    assert!(html.contains("tavily_extract"));
    assert!(html.contains("get_current_time"));
}

#[tokio::test]
async fn mcp_initialize() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {}
        }))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["result"]["serverInfo"]["name"], "spyglass");
    assert_eq!(body["result"]["protocolVersion"], "2024-11-05");
}

#[tokio::test]
async fn mcp_tools_list() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/list",
            "params": {}
        }))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    let tools = body["result"]["tools"].as_array().unwrap();

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["tavily_search", "tavily_extract", "get_current_time"]);

    for tool in tools {
        assert!(tool["description"].as_str().is_some());
        assert!(tool["inputSchema"].is_object());
    }
}

#[tokio::test]
async fn response_id_echoes_string_id() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": "abc-123",
            "method": "tools/list"
        }))
        .await;

    let body: serde_json::Value = resp.json();
    assert_eq!(body["id"], "abc-123");
}

#[tokio::test]
async fn response_id_null_when_absent() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "method": "initialize"
        }))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert!(body["id"].is_null());
    assert!(body.get("result").is_some());
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server.post("/mcp").text("{not json at all").await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], -32700);
    assert!(body["id"].is_null());
}

#[tokio::test]
async fn unknown_method_names_the_method() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 9,
            "method": "tools/remove",
            "params": {}
        }))
        .await;

    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], -32601);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("tools/remove"));
    assert_eq!(body["id"], 9);
}

#[tokio::test]
async fn missing_credentials_rejected_before_any_tool_runs() {
    let mock = Arc::new(MockTavilyApi::with_search(SearchOutcome {
        results: vec![sample_hit()],
        answer: None,
    }));
    let server = build_test_app(Arc::clone(&mock), None, TransportMode::Json);

    let resp = server
        .post("/mcp")
        .json(&call_tool("tavily_search", serde_json::json!({"query": "rust"})))
        .await;

    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], -32603);
    assert!(mock.keys_seen.read().unwrap().is_empty());
}

#[tokio::test]
async fn blank_credentials_rejected_like_missing() {
    let server = build_test_app(
        Arc::new(MockTavilyApi::new()),
        Some("   "),
        TransportMode::Json,
    );

    let resp = server
        .post("/mcp")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/list"
        }))
        .await;

    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], -32603);
}

#[tokio::test]
async fn separator_only_credentials_fail_inside_the_tool() {
    // " ,, " survives the blank check but parses to an empty pool, so the
    // failure lands in the content-text channel.
    let server = build_test_app(
        Arc::new(MockTavilyApi::new()),
        Some(" ,, "),
        TransportMode::Json,
    );

    let resp = server
        .post("/mcp")
        .json(&call_tool("tavily_search", serde_json::json!({"query": "rust"})))
        .await;

    let body: serde_json::Value = resp.json();
    assert!(body.get("error").is_none());
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("❌ Search failed:"));
    assert!(text.contains("no usable keys"));
}

#[tokio::test]
async fn unknown_tool_is_an_explicit_internal_error() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&call_tool("does_not_exist", serde_json::json!({})))
        .await;

    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"]["code"], -32603);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("unknown tool: does_not_exist"));
}

#[tokio::test]
async fn search_renders_the_worked_example() {
    let mock = Arc::new(MockTavilyApi::with_search(SearchOutcome {
        results: vec![sample_hit()],
        answer: None,
    }));
    let server = default_app(mock);

    let resp = server
        .post("/mcp")
        .json(&call_tool(
            "tavily_search",
            serde_json::json!({"query": "rust ownership"}),
        ))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["id"], 1);

    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("rust ownership"));
    assert!(text.contains("Found 1 results"));
    assert!(text.contains("The Rust Book: Ownership"));
    assert!(text.contains("doc.rust-lang.org"));
    assert!(text.contains("0.87"));
    assert!(text.contains("2024-01-15"));
}

#[tokio::test]
async fn downstream_failure_stays_inside_the_success_envelope() {
    let mock = Arc::new(MockTavilyApi::failing(
        "Tavily API error: 500 Internal Server Error",
    ));
    let server = default_app(mock);

    let resp = server
        .post("/mcp")
        .json(&call_tool("tavily_search", serde_json::json!({"query": "rust"})))
        .await;

    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert!(body.get("error").is_none());

    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("❌ Search failed:"));
    assert!(text.contains("500 Internal Server Error"));
}

#[tokio::test]
async fn search_without_query_fails_in_content_channel() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&call_tool("tavily_search", serde_json::json!({})))
        .await;

    let body: serde_json::Value = resp.json();
    assert!(body.get("error").is_none());
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("❌ Search failed:"));
    assert!(text.contains("invalid arguments"));
}

#[tokio::test]
async fn extract_truncates_long_content() {
    let mock = Arc::new(MockTavilyApi::with_extract(vec![ExtractHit {
        url: "https://example.com/article".to_string(),
        raw_content: "x".repeat(2500),
        status_code: 200,
    }]));
    let server = default_app(mock);

    let resp = server
        .post("/mcp")
        .json(&call_tool(
            "tavily_extract",
            serde_json::json!({"urls": ["https://example.com/article"]}),
        ))
        .await;

    let body: serde_json::Value = resp.json();
    let text = body["result"]["content"][0]["text"].as_str().unwrap();

    assert!(text.contains("https://example.com/article"));
    assert!(text.contains(&"x".repeat(2000)));
    assert!(!text.contains(&"x".repeat(2001)));
    assert!(text.contains("...(content truncated)"));
}

#[tokio::test]
async fn extract_without_urls_fails_in_content_channel() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&call_tool("tavily_extract", serde_json::json!({})))
        .await;

    let body: serde_json::Value = resp.json();
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("❌ Extraction failed:"));
}

#[tokio::test]
async fn current_time_defaults_to_utc_iso() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&call_tool("get_current_time", serde_json::json!({})))
        .await;

    let body: serde_json::Value = resp.json();
    assert!(body.get("error").is_none());

    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("🌍 Timezone: UTC"));
    assert!(text.contains("Unix seconds:"));
    assert!(text.contains("Unix milliseconds:"));
}

#[tokio::test]
async fn current_time_honors_timezone_and_format() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&call_tool(
            "get_current_time",
            serde_json::json!({"timezone": "Asia/Shanghai", "format": "chinese"}),
        ))
        .await;

    let body: serde_json::Value = resp.json();
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("🌍 Timezone: Asia/Shanghai"));
    assert!(text.contains('年'));
}

#[tokio::test]
async fn current_time_invalid_timezone_warns_instead_of_failing() {
    let server = default_app(Arc::new(MockTavilyApi::new()));

    let resp = server
        .post("/mcp")
        .json(&call_tool(
            "get_current_time",
            serde_json::json!({"timezone": "Nowhere/Special"}),
        ))
        .await;

    let body: serde_json::Value = resp.json();
    assert!(body.get("error").is_none());

    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("🌍 Timezone: UTC"));
    assert!(text.contains("⚠️ Unknown timezone \"Nowhere/Special\""));
}

#[tokio::test]
async fn credential_rotation_draws_only_from_the_pool() {
    let mock = Arc::new(MockTavilyApi::new());
    let server = build_test_app(Arc::clone(&mock), Some("k1, k2, k3"), TransportMode::Json);

    for _ in 0..20 {
        server
            .post("/mcp")
            .json(&call_tool("tavily_search", serde_json::json!({"query": "q"})))
            .await
            .assert_status_ok();
    }

    let seen = mock.keys_seen.read().unwrap();
    assert_eq!(seen.len(), 20);
    for key in seen.iter() {
        assert!(["k1", "k2", "k3"].contains(&key.as_str()), "stray key: {key}");
    }
}

#[tokio::test]
async fn event_stream_transport_frames_the_envelope() {
    let server = build_test_app(
        Arc::new(MockTavilyApi::new()),
        Some(TEST_KEYS),
        TransportMode::EventStream,
    );

    let resp = server
        .post("/mcp")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/list"
        }))
        .await;

    resp.assert_status_ok();
    assert_eq!(resp.header("content-type"), "text/event-stream");
    assert_eq!(resp.header("cache-control"), "no-cache");

    let text = resp.text();
    assert!(text.starts_with("data: "));
    assert!(text.ends_with("\n\n"));

    let inner: serde_json::Value =
        serde_json::from_str(text.strip_prefix("data: ").unwrap().trim_end()).unwrap();
    assert_eq!(inner["id"], 5);
    assert!(inner["result"]["tools"].is_array());
}

#[tokio::test]
async fn event_stream_transport_frames_errors_too() {
    let server = build_test_app(
        Arc::new(MockTavilyApi::new()),
        Some(TEST_KEYS),
        TransportMode::EventStream,
    );

    let resp = server.post("/mcp").text("garbage").await;

    resp.assert_status_ok();
    let text = resp.text();
    let inner: serde_json::Value =
        serde_json::from_str(text.strip_prefix("data: ").unwrap().trim_end()).unwrap();
    assert_eq!(inner["error"]["code"], -32700);
    assert!(inner["id"].is_null());
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = default_app(Arc::new(MockTavilyApi::new()));
    let resp = server.get("/nope").await;
    resp.assert_status_not_found();
}
