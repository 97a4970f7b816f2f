use axum::response::Html;

use spyglass_mcp::ToolRegistry;

/// Informational landing page.
pub async fn landing() -> Html<String> {
    let tool_items: String = ToolRegistry::definitions()
        .iter()
        .map(|t| format!("<li><strong>{}</strong>: {}</li>", t.name, t.description))
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Spyglass MCP Gateway</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; }}
        .container {{ max-width: 800px; margin: 0 auto; }}
        .status {{ color: #28a745; font-weight: bold; }}
        .endpoint {{ background: #f8f9fa; padding: 10px; border-radius: 5px; margin: 10px 0; }}
        code {{ background: #e9ecef; padding: 2px 5px; border-radius: 3px; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>🔍 Spyglass MCP Gateway</h1>
        <p class="status">✅ Service is up</p>

        <h2>Server</h2>
        <ul>
            <li><strong>Name:</strong> {name}</li>
            <li><strong>Version:</strong> {version}</li>
            <li><strong>Description:</strong> {description}</li>
        </ul>

        <h2>Endpoints</h2>
        <div class="endpoint">
            <strong>Health check:</strong> <code>GET /health</code>
        </div>
        <div class="endpoint">
            <strong>MCP endpoint:</strong> <code>POST /mcp</code>
        </div>

        <h2>Tools</h2>
        <ul>
            {tool_items}
        </ul>

        <h2>Client configuration</h2>
        <pre><code>{{
  "name": "spyglass",
  "transport": "streamable-http",
  "url": "https://your-host.example.com/mcp",
  "description": "Tavily search via spyglass"
}}</code></pre>
    </div>
</body>
</html>
"#,
        name = crate::SERVER_NAME,
        version = crate::SERVER_VERSION,
        description = crate::SERVER_DESCRIPTION,
    );

    Html(html)
}
