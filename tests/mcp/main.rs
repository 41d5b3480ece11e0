use demo_mcp::mcp::DemoMcpServer;
use rmcp::model::{CallToolResult, JsonObject, ReadResourceResult, ResourceContents};
use serde_json::Value;

mod resources;

pub fn server() -> DemoMcpServer {
    DemoMcpServer::new().expect("demo registry should build")
}

/// Convert a `json!` object literal into tool arguments.
pub fn arguments(value: Value) -> Option<JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        other => panic!("arguments must be an object, got {other}"),
    }
}

/// Extract the single text block from a successful CallToolResult
///
/// Panics if the result indicates an error or has no text content
pub fn extract_tool_text(result: &CallToolResult) -> String {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert_eq!(
        result.content.len(),
        1,
        "Tool result should have exactly one content block"
    );

    result.content[0]
        .as_text()
        .expect("Tool result content should be text")
        .text
        .clone()
}

/// Extract (uri, text) from a single-entry ReadResourceResult
pub fn extract_resource_text(result: &ReadResourceResult) -> (String, String) {
    assert_eq!(
        result.contents.len(),
        1,
        "Resource result should have exactly one entry"
    );

    match &result.contents[0] {
        ResourceContents::TextResourceContents { uri, text, .. } => (uri.clone(), text.clone()),
        other => panic!("Resource content should be text, got {:?}", other),
    }
}
