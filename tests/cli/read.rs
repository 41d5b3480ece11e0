use crate::{command, run, stderr, stdout};

#[test]
fn test_read_greeting() {
    let output = run(&["read", "greeting://Alice"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "안녕하세요, Alice님!\n");
}

#[test]
fn test_read_user_profile() {
    let output = run(&["read", "user_profile://bob"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 6);
    assert_eq!(text.lines().next(), Some("사용자: bob"));
}

#[test]
fn test_read_unmatched_uri_is_rejected() {
    let output = run(&["read", "weather://Seoul"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no resource matches URI: weather://Seoul"));
}

#[test]
fn test_logs_go_to_stderr() {
    let output = command()
        .args(["--log-level", "info", "read", "greeting://Alice"])
        .output()
        .expect("failed to run demo-mcp");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "안녕하세요, Alice님!\n");
    assert!(stderr(&output).contains("completed"));
}

#[test]
fn test_invalid_log_filter_exits_with_error() {
    let output = command()
        .args(["--log-level", "demo_mcp=loudest", "list"])
        .output()
        .expect("failed to run demo-mcp");
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}
