use rmcp::model::ErrorCode;
use serde_json::json;

use crate::{arguments, extract_tool_text, server};

// ============================================================================
// add tests
// ============================================================================

#[tokio::test]
async fn test_add_integers() {
    let server = server();

    for (a, b, expected) in [(5, 3, "8"), (10, 20, "30"), (-1, 1, "0")] {
        let result = server
            .call("add", arguments(json!({"a": a, "b": b})))
            .await
            .unwrap();
        assert_eq!(extract_tool_text(&result), expected, "add({a}, {b})");
    }
}

#[tokio::test]
async fn test_add_decimals() {
    let server = server();

    let result = server
        .call("add", arguments(json!({"a": 1.25, "b": 2})))
        .await
        .unwrap();
    assert_eq!(extract_tool_text(&result), "3.25");
}

#[tokio::test]
async fn test_add_ignores_extra_arguments() {
    let server = server();

    let result = server
        .call("add", arguments(json!({"a": 1, "b": 2, "c": "ignored"})))
        .await
        .unwrap();
    assert_eq!(extract_tool_text(&result), "3");
}

#[tokio::test]
async fn test_add_rejects_non_numeric_argument() {
    let server = server();

    let err = server
        .call("add", arguments(json!({"a": "x", "b": 3})))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("`a`"), "{}", err.message);
}

#[tokio::test]
async fn test_add_rejects_missing_argument() {
    let server = server();

    let err = server
        .call("add", arguments(json!({"a": 1})))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("`b`"), "{}", err.message);

    let err = server.call("add", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_add_overflow_is_internal_error() {
    let server = server();

    let err = server
        .call("add", arguments(json!({"a": f64::MAX, "b": f64::MAX})))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
}
