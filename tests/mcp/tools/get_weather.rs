use demo_mcp::handlers::weather::{CONDITIONS, HUMIDITY_RANGE, TEMPERATURE_RANGE};
use rmcp::model::ErrorCode;
use serde_json::json;

use crate::{arguments, extract_tool_text, server};

/// Check a report against `<city>의 현재 날씨: <condition>, 기온: <t>°C, 습도: <h>%`.
fn assert_weather_report(text: &str, city: &str) {
    let rest = text
        .strip_prefix(&format!("{city}의 현재 날씨: "))
        .unwrap_or_else(|| panic!("report should start with the city: {text}"));
    let (condition, rest) = rest.split_once(", 기온: ").expect("temperature field");
    let (temperature, rest) = rest.split_once("°C, 습도: ").expect("humidity field");
    let humidity = rest.strip_suffix('%').expect("percent sign");

    assert!(CONDITIONS.contains(&condition), "condition: {condition}");
    let temperature: i32 = temperature.parse().expect("integer temperature");
    assert!(TEMPERATURE_RANGE.contains(&temperature), "temperature: {temperature}");
    let humidity: u8 = humidity.parse().expect("integer humidity");
    assert!(HUMIDITY_RANGE.contains(&humidity), "humidity: {humidity}");
}

#[tokio::test]
async fn test_get_weather_seoul() {
    let server = server();

    for _ in 0..50 {
        let result = server
            .call("get_weather", arguments(json!({"city": "Seoul"})))
            .await
            .unwrap();
        assert_weather_report(&extract_tool_text(&result), "Seoul");
    }
}

#[tokio::test]
async fn test_get_weather_any_city() {
    let server = server();

    for city in ["", "서울", "부산", "São Paulo", "a, b"] {
        let result = server
            .call("get_weather", arguments(json!({ "city": city })))
            .await
            .unwrap();
        assert_weather_report(&extract_tool_text(&result), city);
    }
}

#[tokio::test]
async fn test_get_weather_rejects_numeric_city() {
    let server = server();

    let err = server
        .call("get_weather", arguments(json!({"city": 42})))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}
