use rmcp::model::ErrorCode;
use serde_json::json;

use crate::{arguments, extract_tool_text, server};

#[tokio::test]
async fn test_unknown_tool_is_an_error() {
    let server = server();

    let err = server
        .call("subtract", arguments(json!({"a": 1, "b": 2})))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("subtract"));
}

#[tokio::test]
async fn test_resource_names_are_not_tools() {
    let server = server();

    let err = server
        .call("greeting", arguments(json!({"name": "Alice"})))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_server_keeps_working_after_errors() {
    let server = server();

    assert!(server.call("nope", None).await.is_err());
    assert!(server.read("nope://x").await.is_err());

    let result = server
        .call("add", arguments(json!({"a": 2, "b": 2})))
        .await
        .unwrap();
    assert_eq!(extract_tool_text(&result), "4");
}
