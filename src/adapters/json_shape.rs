//! Extraction from JSON-shaped request descriptions
//!
//! Two shapes are recognised. The client "options" shape carries `uri` (or
//! `baseUrl` plus `path`), `data` and `queryParameters`; the plain "request"
//! shape carries `url` and `body`. Both may carry `method` and `headers`.

use serde_json::{Map, Value as JsonValue};

use super::{body_from_text, RequestLike, RequestParts};
use crate::request::Body;

const OPTIONS_KEYS: &[&str] = &["uri", "path", "baseUrl", "data", "queryParameters"];

impl RequestLike for JsonValue {
    fn extract(&self) -> RequestParts {
        let mut parts = RequestParts::default();

        let Some(object) = self.as_object() else {
            parts.warn(format!("Expected a request object, found {}", kind(self)));
            return parts;
        };

        parts.method = read_string(object, "method", &mut parts);
        read_headers(object, &mut parts);

        if OPTIONS_KEYS.iter().any(|key| object.contains_key(*key)) {
            extract_options_shape(object, &mut parts);
        } else {
            extract_request_shape(object, &mut parts);
        }

        parts
    }

    fn is_null(&self) -> bool {
        JsonValue::is_null(self)
    }
}

fn extract_options_shape(object: &Map<String, JsonValue>, parts: &mut RequestParts) {
    parts.url = match read_string(object, "uri", parts) {
        Some(uri) => Some(uri),
        None => {
            let base = read_string(object, "baseUrl", parts);
            let path = read_string(object, "path", parts);
            join_url(base.as_deref(), path.as_deref())
        }
    };
    if parts.url.is_none() {
        parts.warn("Request has neither 'uri' nor 'path'");
    }

    match object.get("queryParameters") {
        None | Some(JsonValue::Null) => {}
        Some(JsonValue::Object(query)) => {
            for (key, value) in query {
                parts.query_parameters.insert(key.clone(), value.clone());
            }
        }
        Some(other) => parts.warn(format!("'queryParameters' should be an object, found {}", kind(other))),
    }

    parts.body = match object.get("data") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Object(map)) => Some(Body::Structured(map.clone())),
        Some(JsonValue::String(text)) => Some(Body::Raw(text.clone())),
        Some(array @ JsonValue::Array(_)) => Some(Body::Raw(array.to_string())),
        Some(other) => {
            parts.warn(format!("'data' of type {} cannot be sent as a body and was omitted", kind(other)));
            None
        }
    };
}

fn extract_request_shape(object: &Map<String, JsonValue>, parts: &mut RequestParts) {
    parts.url = read_string(object, "url", parts);
    if parts.url.is_none() {
        parts.warn("Request has no 'url'");
    }

    parts.body = match object.get("body") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(text)) => body_from_text(text),
        Some(JsonValue::Object(map)) => Some(Body::Structured(map.clone())),
        Some(other) => {
            parts.warn(format!("'body' should be a string, found {}", kind(other)));
            None
        }
    };
}

fn read_string(object: &Map<String, JsonValue>, key: &str, parts: &mut RequestParts) -> Option<String> {
    match object.get(key) {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(other) => {
            parts.warn(format!("'{}' should be a string, found {}", key, kind(other)));
            None
        }
    }
}

fn read_headers(object: &Map<String, JsonValue>, parts: &mut RequestParts) {
    let headers = match object.get("headers") {
        None | Some(JsonValue::Null) => return,
        Some(JsonValue::Object(headers)) => headers,
        Some(other) => {
            parts.warn(format!("'headers' should be an object, found {}", kind(other)));
            return;
        }
    };

    for (name, value) in headers {
        let value = match value {
            JsonValue::String(s) => s.clone(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Bool(b) => b.to_string(),
            JsonValue::Array(items) => items
                .iter()
                .map(|item| match item {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            JsonValue::Null | JsonValue::Object(_) => {
                parts.warn(format!("Header '{}' has an unusable {} value and was skipped", name, kind(value)));
                continue;
            }
        };
        parts.headers.insert(name.clone(), value);
    }
}

/// `baseUrl` + `path`, unless `path` is already absolute
fn join_url(base: Option<&str>, path: Option<&str>) -> Option<String> {
    match (base, path) {
        (_, Some(path)) if path.contains("://") => Some(path.to_string()),
        (Some(base), Some(path)) if !base.is_empty() => Some(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )),
        (Some(base), None) => Some(base.to_string()),
        (_, Some(path)) => Some(path.to_string()),
        (None, None) => None,
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_shape() {
        let request = json!({
            "method": "POST",
            "baseUrl": "https://api.example.com/",
            "path": "/posts",
            "headers": {"Content-Type": "application/json", "X-Retry": 2},
            "queryParameters": {"draft": true},
            "data": {"title": "foo"}
        });
        let parts = request.extract();

        assert!(parts.warnings.is_empty(), "{:?}", parts.warnings);
        assert_eq!(parts.method.as_deref(), Some("POST"));
        assert_eq!(parts.url.as_deref(), Some("https://api.example.com/posts"));
        assert_eq!(parts.headers["X-Retry"], "2");
        assert_eq!(parts.query_parameters["draft"], json!(true));
        assert!(matches!(parts.body, Some(Body::Structured(_))));
    }

    #[test]
    fn test_options_shape_prefers_uri() {
        let parts = json!({"uri": "https://a.example.com/x", "path": "/ignored"}).extract();
        assert_eq!(parts.url.as_deref(), Some("https://a.example.com/x"));
    }

    #[test]
    fn test_request_shape() {
        let request = json!({
            "method": "PUT",
            "url": "https://api.example.com/posts/1",
            "headers": {"Accept": ["text/html", "application/json"]},
            "body": "{\"id\":1}"
        });
        let parts = request.extract();

        assert_eq!(parts.url.as_deref(), Some("https://api.example.com/posts/1"));
        assert_eq!(parts.headers["Accept"], "text/html, application/json");
        assert_eq!(parts.body, Some(Body::Raw("{\"id\":1}".to_string())));
    }

    #[test]
    fn test_wrong_types_become_warnings() {
        let request = json!({
            "method": 7,
            "url": "https://example.com",
            "headers": "Accept: */*",
            "body": 42
        });
        let parts = request.extract();

        assert_eq!(parts.method, None);
        assert_eq!(parts.url.as_deref(), Some("https://example.com"));
        assert!(parts.headers.is_empty());
        assert!(parts.body.is_none());
        assert_eq!(parts.warnings.len(), 3);
    }

    #[test]
    fn test_non_object() {
        let parts = json!([1, 2]).extract();
        assert!(parts.url.is_none());
        assert_eq!(parts.warnings.len(), 1);
        assert!(RequestLike::is_null(&json!(null)));
        assert!(!RequestLike::is_null(&json!({})));
    }

    #[test]
    fn test_array_data_is_raw_json() {
        let parts = json!({"uri": "https://example.com", "data": [1, 2]}).extract();
        assert_eq!(parts.body, Some(Body::Raw("[1,2]".to_string())));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url(Some("https://a.com/"), Some("/b")).as_deref(), Some("https://a.com/b"));
        assert_eq!(join_url(Some("https://a.com"), Some("https://c.com/d")).as_deref(), Some("https://c.com/d"));
        assert_eq!(join_url(None, Some("/b")).as_deref(), Some("/b"));
        assert_eq!(join_url(Some("https://a.com"), None).as_deref(), Some("https://a.com"));
        assert_eq!(join_url(None, None), None);
    }
}
