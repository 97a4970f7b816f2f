use anyhow::Context;
use reqwest::Client;
use serde_json::Value;

/// Post a JSON-RPC request to the gateway and return its `result` value.
///
/// Understands both deployment transports: a plain JSON body and the
/// single `data: <json>` event-stream frame.
pub async fn call(gateway_url: &str, method: &str, params: Value) -> anyhow::Result<Value> {
    let client = Client::new();

    let resp = client
        .post(format!("{gateway_url}/mcp"))
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        }))
        .send()
        .await?;

    let body = resp.text().await?;
    let envelope = parse_envelope(&body)?;

    if let Some(error) = envelope.get("error") {
        anyhow::bail!("gateway error: {}", serde_json::to_string_pretty(error)?);
    }

    envelope
        .get("result")
        .cloned()
        .context("response has no result")
}

/// Invoke a tool by name and return its result.
pub async fn call_tool(gateway_url: &str, name: &str, arguments: Value) -> anyhow::Result<Value> {
    call(
        gateway_url,
        "tools/call",
        serde_json::json!({ "name": name, "arguments": arguments }),
    )
    .await
}

/// Print a tool result's text content blocks.
pub fn print_content(result: &Value) {
    match result.get("content").and_then(Value::as_array) {
        Some(blocks) => {
            for block in blocks {
                if let Some(text) = block.get("text").and_then(Value::as_str) {
                    println!("{text}");
                }
            }
        }
        None => println!("{result}"),
    }
}

fn parse_envelope(body: &str) -> anyhow::Result<Value> {
    let json = match body.strip_prefix("data: ") {
        Some(frame) => frame.trim_end(),
        None => body,
    };

    serde_json::from_str(json).context("gateway returned an unparsable body")
}
