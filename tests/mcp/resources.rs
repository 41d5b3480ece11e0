use demo_mcp::handlers::profile::{AGE_RANGE, DEPARTMENTS, EXPERIENCE_RANGE, LOCATIONS, ROLES};
use rmcp::model::ErrorCode;

use crate::{extract_resource_text, server};

// ============================================================================
// greeting tests
// ============================================================================

#[tokio::test]
async fn test_greeting() {
    let server = server();

    let result = server.read("greeting://Alice").await.unwrap();
    let (uri, text) = extract_resource_text(&result);

    assert_eq!(uri, "greeting://Alice");
    assert_eq!(text, "안녕하세요, Alice님!");
}

#[tokio::test]
async fn test_greeting_non_ascii() {
    let server = server();

    let result = server.read("greeting://홍길동").await.unwrap();
    let (_, text) = extract_resource_text(&result);
    assert_eq!(text, "안녕하세요, 홍길동님!");
}

#[tokio::test]
async fn test_greeting_decodes_special_characters() {
    let server = server();

    let result = server
        .read("greeting://Kim%20%26%20Lee%3F")
        .await
        .unwrap();
    let (uri, text) = extract_resource_text(&result);

    // The URI is echoed back as requested.
    assert_eq!(uri, "greeting://Kim%20%26%20Lee%3F");
    assert_eq!(text, "안녕하세요, Kim & Lee?님!");
}

// ============================================================================
// user_profile tests
// ============================================================================

fn field<'a>(line: &'a str, label: &str) -> &'a str {
    line.strip_prefix(label)
        .unwrap_or_else(|| panic!("expected `{label}` line, got: {line}"))
}

#[tokio::test]
async fn test_user_profile() {
    let server = server();

    for _ in 0..50 {
        let result = server.read("user_profile://bob").await.unwrap();
        let (uri, text) = extract_resource_text(&result);
        assert_eq!(uri, "user_profile://bob");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6, "{text}");
        assert_eq!(lines[0], "사용자: bob");
        assert!(ROLES.contains(&field(lines[1], "직책: ")));
        assert!(DEPARTMENTS.contains(&field(lines[2], "부서: ")));
        assert!(LOCATIONS.contains(&field(lines[3], "위치: ")));

        let age: u8 = field(lines[4], "나이: ")
            .strip_suffix('세')
            .unwrap()
            .parse()
            .unwrap();
        assert!(AGE_RANGE.contains(&age), "age: {age}");

        let experience: u8 = field(lines[5], "경력: ")
            .strip_suffix('년')
            .unwrap()
            .parse()
            .unwrap();
        assert!(EXPERIENCE_RANGE.contains(&experience), "experience: {experience}");
    }
}

#[tokio::test]
async fn test_user_profile_non_ascii_username() {
    let server = server();

    let result = server.read("user_profile://홍길동").await.unwrap();
    let (_, text) = extract_resource_text(&result);
    assert!(text.starts_with("사용자: 홍길동\n"));
}

// ============================================================================
// unmatched URIs
// ============================================================================

#[tokio::test]
async fn test_unmatched_uri_is_resource_not_found() {
    let server = server();

    for uri in [
        "weather://Seoul",
        "greeting://",
        "greeting://a/b",
        "user_profile:/bob",
        "",
    ] {
        let err = server.read(uri).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND, "uri: {uri:?}");
    }
}
