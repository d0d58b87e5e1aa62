//! Per-call request description
//!
//! [`CreateOptions`] carries everything about a request except its method
//! and URL: headers, query parameters, cookies, body or multipart fields,
//! transport flags and the per-call formatting switches.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use crate::errors::{CurlgenError, Result};
use crate::options::TransportFlags;

/// Request body: JSON-encoded structure or raw text
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Encoded with serde_json, keys in insertion order
    Structured(Map<String, JsonValue>),
    /// Emitted verbatim
    Raw(String),
}

impl Body {
    /// Payload placed inside `--data '...'`
    pub fn encode(&self) -> Result<String> {
        match self {
            Body::Structured(map) => serde_json::to_string(map)
                .map_err(|e| CurlgenError::invalid(format!("Failed to encode body as JSON: {}", e))),
            Body::Raw(text) => Ok(text.clone()),
        }
    }
}

impl TryFrom<JsonValue> for Body {
    type Error = CurlgenError;

    fn try_from(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(map) => Ok(Body::Structured(map)),
            JsonValue::String(text) => Ok(Body::Raw(text)),
            _ => Err(CurlgenError::invalid("Data must be either a Map or a String")),
        }
    }
}

impl From<Map<String, JsonValue>> for Body {
    fn from(map: Map<String, JsonValue>) -> Self {
        Body::Structured(map)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Raw(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Raw(text.to_string())
    }
}

/// Value of a multipart form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Uploaded from a local path (`name=@path`)
    File(PathBuf),
    /// Plain text value
    Value(String),
}

impl FormValue {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        FormValue::File(path.into())
    }

    /// Any displayable scalar, stringified
    pub fn value(value: impl fmt::Display) -> Self {
        FormValue::Value(value.to_string())
    }
}

/// Optional parts of a request plus per-call overrides of the defaults
///
/// `None` for `mask_sensitive`, `formatted` and `show_debug_output` means
/// "use the configured default".
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub query_parameters: IndexMap<String, JsonValue>,
    pub body: Option<Body>,
    pub headers: IndexMap<String, String>,
    pub cookies: IndexMap<String, String>,
    pub form_fields: IndexMap<String, FormValue>,
    pub transport_flags: Option<TransportFlags>,
    pub mask_sensitive: Option<bool>,
    pub formatted: Option<bool>,
    pub show_debug_output: Option<bool>,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.query_parameters.insert(key.into(), value.into());
        self
    }

    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn form_field(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.form_fields.insert(name.into(), FormValue::value(value));
        self
    }

    pub fn form_file(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.form_fields.insert(name.into(), FormValue::file(path));
        self
    }

    /// Structured body, JSON-encoded on output
    pub fn json(mut self, map: Map<String, JsonValue>) -> Self {
        self.body = Some(Body::Structured(map));
        self
    }

    /// Raw body, emitted verbatim
    pub fn raw(mut self, text: impl Into<String>) -> Self {
        self.body = Some(Body::Raw(text.into()));
        self
    }

    /// Body from an arbitrary JSON value; only objects and strings are accepted
    pub fn data(mut self, value: JsonValue) -> Result<Self> {
        self.body = Some(Body::try_from(value)?);
        Ok(self)
    }

    pub fn flags(mut self, flags: TransportFlags) -> Self {
        self.transport_flags = Some(flags);
        self
    }

    pub fn mask(mut self, mask_sensitive: bool) -> Self {
        self.mask_sensitive = Some(mask_sensitive);
        self
    }

    pub fn formatted(mut self, formatted: bool) -> Self {
        self.formatted = Some(formatted);
        self
    }

    pub fn debug(mut self, show_debug_output: bool) -> Self {
        self.show_debug_output = Some(show_debug_output);
        self
    }
}
