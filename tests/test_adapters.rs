//! Integration tests for generating commands from foreign request objects

use curlgen::adapters::{from_request_like_with_config, ERROR_PREFIX};
use curlgen::{from_request_like, Config, CreateOptions, TransportFlags};
use serde_json::{json, Value as JsonValue};

fn quiet() -> Config {
    Config {
        show_debug_output: false,
        ..Config::default()
    }
}

// =============================================================================
// JSON shapes
// =============================================================================

#[test]
fn test_options_shape() {
    let request = json!({
        "method": "POST",
        "baseUrl": "https://api.example.com",
        "path": "/posts",
        "headers": {"Content-Type": "application/json"},
        "queryParameters": {"notify": false},
        "data": {"title": "foo", "userId": 1}
    });
    let cmd = from_request_like_with_config(&quiet(), Some(&request), CreateOptions::new());
    assert_eq!(
        cmd,
        r#"curl -X POST -H "Content-Type: application/json" --data '{"title":"foo","userId":1}' "https://api.example.com/posts?notify=false""#
    );
}

#[test]
fn test_request_shape_defaults_method() {
    let request = json!({"url": "https://api.example.com/posts", "headers": {"Accept": "*/*"}});
    let cmd = from_request_like_with_config(&quiet(), Some(&request), CreateOptions::new());
    assert_eq!(cmd, r#"curl -X GET -H "Accept: */*" "https://api.example.com/posts""#);
}

#[test]
fn test_partial_extraction_still_produces_command() {
    let request = json!({"method": "GET", "url": "https://example.com", "headers": ["broken"]});
    let cmd = from_request_like_with_config(&quiet(), Some(&request), CreateOptions::new());
    assert_eq!(cmd, r#"curl -X GET "https://example.com""#);
}

#[test]
fn test_null_and_missing_requests() {
    assert_eq!(from_request_like_with_config(&quiet(), Some(&JsonValue::Null), CreateOptions::new()), "");
    assert_eq!(from_request_like::<JsonValue>(None, CreateOptions::new()), "");
}

#[test]
fn test_unusable_request_gives_error_string() {
    for request in [json!(42), json!({"url": "not a url"}), json!({"path": "/relative"})] {
        let out = from_request_like_with_config(&quiet(), Some(&request), CreateOptions::new());
        assert!(out.starts_with(ERROR_PREFIX), "{}", out);
    }
}

#[test]
fn test_adapter_respects_masking_and_flags() {
    let request = json!({
        "method": "DELETE",
        "url": "https://example.com/items/1",
        "headers": {"Authorization": "Bearer abc"}
    });
    let cmd = from_request_like_with_config(
        &quiet(),
        Some(&request),
        CreateOptions::new()
            .mask(true)
            .flags(TransportFlags::new().with_verbose(true)),
    );
    assert_eq!(
        cmd,
        r#"curl -X DELETE --verbose -H "Authorization: ********" "https://example.com/items/1""#
    );
}

// =============================================================================
// reqwest and http requests
// =============================================================================

#[test]
fn test_reqwest_request() {
    let mut request = reqwest::Request::new(
        reqwest::Method::PUT,
        reqwest::Url::parse("https://api.example.com/posts/1").unwrap(),
    );
    request
        .headers_mut()
        .insert("x-api-key", reqwest::header::HeaderValue::from_static("k"));
    *request.body_mut() = Some(reqwest::Body::from("plain text"));

    let cmd = from_request_like_with_config(&quiet(), Some(&request), CreateOptions::new().mask(true));
    assert_eq!(
        cmd,
        r#"curl -X PUT -H "x-api-key: ********" --data 'plain text' "https://api.example.com/posts/1""#
    );
}

#[test]
fn test_http_request() {
    let request = http::Request::post("https://api.example.com/posts")
        .header("content-type", "application/json")
        .body(r#"{"title":"foo"}"#.to_string())
        .unwrap();

    let cmd = from_request_like_with_config(&quiet(), Some(&request), CreateOptions::new());
    assert_eq!(
        cmd,
        r#"curl -X POST -H "content-type: application/json" --data '{"title":"foo"}' "https://api.example.com/posts""#
    );
}

#[test]
fn test_text_body_is_sent_verbatim() {
    let body = r#"{"id": 12345678901234567890123, "a": 1, "a": 2}"#;
    let request = http::Request::post("https://example.com/x").body(body.to_string()).unwrap();

    let cmd = from_request_like_with_config(&quiet(), Some(&request), CreateOptions::new());
    assert_eq!(cmd, format!("curl -X POST --data '{}' \"https://example.com/x\"", body));

    let json_request = json!({"method": "POST", "url": "https://example.com/x", "body": body});
    let cmd = from_request_like_with_config(&quiet(), Some(&json_request), CreateOptions::new());
    assert_eq!(cmd, format!("curl -X POST --data '{}' \"https://example.com/x\"", body));
}

#[test]
fn test_http_request_without_scheme() {
    let request = http::Request::get("/posts").body(()).unwrap();
    let out = from_request_like_with_config(&quiet(), Some(&request), CreateOptions::new());
    assert!(out.starts_with(ERROR_PREFIX));
}
