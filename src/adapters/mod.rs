//! Adapters from third-party request objects
//!
//! Each supported request type implements [`RequestLike`], a total
//! extraction into [`RequestParts`]. Fields that are missing or malformed
//! become warnings instead of errors, so a partially readable request still
//! yields a best-effort command.
//!
//! - **JSON shapes**: `serde_json::Value` in the client "options" shape
//!   (`method`, `uri`/`baseUrl`+`path`, `headers`, `data`,
//!   `queryParameters`) or the "request" shape (`method`, `url`, `headers`,
//!   `body`)
//! - **reqwest**: `reqwest::Request`
//! - **http**: `http::Request<B>` for in-memory bodies

mod http_request;
mod json_shape;
mod reqwest_request;

pub use http_request::HttpBody;

use std::panic::{self, AssertUnwindSafe};

use http::HeaderMap;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::config::{self, Config};
use crate::errors::Result;
use crate::generator::create_with_config;
use crate::request::{Body, CreateOptions};

/// Prefix of the string returned when a command cannot be generated
pub const ERROR_PREFIX: &str = "[curlgen error] ";

/// Method used when the request does not carry a readable one
pub const DEFAULT_METHOD: &str = "GET";

/// Fields read from a foreign request object
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    pub method: Option<String>,
    pub url: Option<String>,
    pub headers: IndexMap<String, String>,
    pub query_parameters: IndexMap<String, JsonValue>,
    pub body: Option<Body>,
    /// One entry per field that could not be read
    pub warnings: Vec<String>,
}

impl RequestParts {
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Merge extracted fields into the caller's options.
    ///
    /// Extracted headers and query parameters come first; caller entries
    /// with the same name replace the value in place. An extracted body wins
    /// over the caller's.
    fn into_options(self, mut options: CreateOptions) -> (String, String, CreateOptions) {
        let method = self
            .method
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_METHOD.to_string());
        let url = self.url.unwrap_or_default();

        let mut headers = self.headers;
        headers.extend(std::mem::take(&mut options.headers));
        options.headers = headers;

        let mut query = self.query_parameters;
        query.extend(std::mem::take(&mut options.query_parameters));
        options.query_parameters = query;

        if self.body.is_some() {
            options.body = self.body;
        }

        (method, url, options)
    }
}

/// A request object the adapters know how to read
pub trait RequestLike {
    /// Read every field that can be read; never fails
    fn extract(&self) -> RequestParts;

    /// Whether this object stands for "no request at all"
    fn is_null(&self) -> bool {
        false
    }
}

/// Generate a curl command from a foreign request using the global config
///
/// Never fails: `None` (or a null object) gives an empty string and any
/// other failure gives a message starting with [`ERROR_PREFIX`].
pub fn from_request_like<R>(request: Option<&R>, options: CreateOptions) -> String
where
    R: RequestLike + ?Sized,
{
    let config = config::global();
    from_request_like_with_config(&config, request, options)
}

/// Same as [`from_request_like`] with an explicit configuration
pub fn from_request_like_with_config<R>(config: &Config, request: Option<&R>, options: CreateOptions) -> String
where
    R: RequestLike + ?Sized,
{
    let Some(request) = request else {
        return String::new();
    };
    if request.is_null() {
        return String::new();
    }

    let parts = match panic::catch_unwind(AssertUnwindSafe(|| request.extract())) {
        Ok(parts) => parts,
        Err(_) => return format!("{}failed to read request fields", ERROR_PREFIX),
    };

    for warning in &parts.warnings {
        warn!(target: "curlgen::adapters", "{}", warning);
    }

    match generate(config, parts, options) {
        Ok(command) => command,
        Err(e) => format!("{}{}", ERROR_PREFIX, e),
    }
}

fn generate(config: &Config, parts: RequestParts, options: CreateOptions) -> Result<String> {
    let (method, url, options) = parts.into_options(options);
    create_with_config(config, &method, &url, options)
}

/// Copy headers out of an `http` header map, joining repeated names
pub(crate) fn read_header_map(map: &HeaderMap, parts: &mut RequestParts) {
    for name in map.keys() {
        let mut values = Vec::new();
        for value in map.get_all(name) {
            match value.to_str() {
                Ok(v) => values.push(v.to_string()),
                Err(_) => parts.warn(format!("Header '{}' has a non-UTF-8 value and was skipped", name)),
            }
        }
        if !values.is_empty() {
            parts.headers.insert(name.as_str().to_string(), values.join(", "));
        }
    }
}

/// Body text is sent byte for byte, JSON or not
pub(crate) fn body_from_text(text: &str) -> Option<Body> {
    if text.is_empty() {
        return None;
    }
    Some(Body::Raw(text.to_string()))
}

/// Interpret body bytes, warning when they are not UTF-8
pub(crate) fn body_from_bytes(bytes: &[u8], parts: &mut RequestParts) -> Option<Body> {
    match std::str::from_utf8(bytes) {
        Ok(text) => body_from_text(text),
        Err(_) => {
            parts.warn(format!("Body is not valid UTF-8 ({} bytes) and was omitted", bytes.len()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    struct Fixed(RequestParts);

    impl RequestLike for Fixed {
        fn extract(&self) -> RequestParts {
            self.0.clone()
        }
    }

    struct Exploding;

    impl RequestLike for Exploding {
        fn extract(&self) -> RequestParts {
            panic!("field access failed")
        }
    }

    fn quiet() -> Config {
        Config {
            show_debug_output: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_none_gives_empty_string() {
        let out = from_request_like_with_config::<Fixed>(&quiet(), None, CreateOptions::new());
        assert_eq!(out, "");
    }

    #[test]
    fn test_method_defaults_to_get() {
        let parts = RequestParts {
            url: Some("https://example.com".to_string()),
            ..RequestParts::default()
        };
        let out = from_request_like_with_config(&quiet(), Some(&Fixed(parts)), CreateOptions::new());
        assert_eq!(out, r#"curl -X GET "https://example.com""#);
    }

    #[test]
    fn test_missing_url_gives_error_string() {
        let out = from_request_like_with_config(&quiet(), Some(&Fixed(RequestParts::default())), CreateOptions::new());
        assert!(out.starts_with(ERROR_PREFIX), "{}", out);
    }

    #[test]
    fn test_panicking_extraction_gives_error_string() {
        let out = from_request_like_with_config(&quiet(), Some(&Exploding), CreateOptions::new());
        assert!(out.starts_with(ERROR_PREFIX));
    }

    #[test]
    fn test_caller_options_are_merged() {
        let mut parts = RequestParts {
            method: Some("POST".to_string()),
            url: Some("https://example.com".to_string()),
            ..RequestParts::default()
        };
        parts.headers.insert("Accept".to_string(), "text/plain".to_string());

        let options = CreateOptions::new()
            .header("X-Trace", "1")
            .cookie("sid", "abc")
            .raw("caller body");
        let out = from_request_like_with_config(&quiet(), Some(&Fixed(parts)), options);
        assert_eq!(
            out,
            r#"curl -X POST -H "Accept: text/plain" -H "X-Trace: 1" -b "sid=abc" --data 'caller body' "https://example.com""#
        );
    }

    #[test]
    fn test_read_header_map_joins_values() {
        let mut map = HeaderMap::new();
        map.append("accept", HeaderValue::from_static("text/html"));
        map.append("accept", HeaderValue::from_static("application/json"));
        map.insert("x-bin", HeaderValue::from_bytes(b"\xff\xfe").unwrap());

        let mut parts = RequestParts::default();
        read_header_map(&map, &mut parts);

        assert_eq!(parts.headers["accept"], "text/html, application/json");
        assert!(!parts.headers.contains_key("x-bin"));
        assert_eq!(parts.warnings.len(), 1);
    }

    #[test]
    fn test_body_from_text() {
        assert_eq!(body_from_text(r#"{"a": 1}"#), Some(Body::Raw(r#"{"a": 1}"#.to_string())));
        assert_eq!(body_from_text("[1,2]"), Some(Body::Raw("[1,2]".to_string())));
        assert_eq!(body_from_text("a=b"), Some(Body::Raw("a=b".to_string())));
        assert_eq!(body_from_text(""), None);
    }
}
