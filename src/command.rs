//! curl command assembly
//!
//! Tokens are emitted in a fixed order so identical input always yields a
//! byte-identical command:
//!
//! 1. `curl -X <METHOD>`
//! 2. transport flags
//! 3. `-H` headers, in insertion order
//! 4. one `-b` token for all cookies
//! 5. `-F` multipart fields, or else `--data '<body>'`
//! 6. the quoted URL with its query string

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::errors::{CurlgenError, Result};
use crate::escape::{escape, quoted};
use crate::mask::{masked_value, SensitiveHeaders};
use crate::options::TransportFlags;
use crate::request::{Body, CreateOptions, FormValue};
use crate::validate::validate;

/// Joiner used between tokens in formatted mode
pub const LINE_CONTINUATION: &str = " \\\n  ";

/// Joiner used between tokens in compact mode
pub const SPACE: &str = " ";

/// Serializes one request into a curl command
#[derive(Debug, Clone, Copy)]
pub struct CommandBuilder<'a> {
    method: &'a str,
    url: &'a str,
    request: &'a CreateOptions,
    flags: Option<&'a TransportFlags>,
    sensitive: &'a SensitiveHeaders,
    mask: bool,
    formatted: bool,
}

impl<'a> CommandBuilder<'a> {
    /// Builder with no flags, masking off and compact output.
    ///
    /// `request.transport_flags` is ignored here: the effective flags are
    /// resolved by the caller and passed through [`CommandBuilder::flags`].
    pub fn new(
        method: &'a str,
        url: &'a str,
        request: &'a CreateOptions,
        sensitive: &'a SensitiveHeaders,
    ) -> Self {
        Self {
            method,
            url,
            request,
            flags: None,
            sensitive,
            mask: false,
            formatted: false,
        }
    }

    pub fn flags(mut self, flags: Option<&'a TransportFlags>) -> Self {
        self.flags = flags;
        self
    }

    pub fn mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    pub fn formatted(mut self, formatted: bool) -> Self {
        self.formatted = formatted;
        self
    }

    /// Validate the input and assemble the final command string
    pub fn build(&self) -> Result<String> {
        let tokens = self.tokens()?;
        let joiner = if self.formatted { LINE_CONTINUATION } else { SPACE };
        Ok(tokens.join(joiner))
    }

    /// The command's tokens in emission order
    pub fn tokens(&self) -> Result<Vec<String>> {
        validate(self.method, self.url)?;

        let mut tokens = vec![format!("curl -X {}", self.method)];

        if let Some(flags) = self.flags {
            tokens.extend(flags.to_tokens());
        }

        for (name, value) in &self.request.headers {
            let value = masked_value(name, value, self.mask, self.sensitive);
            tokens.push(format!("-H {}", quoted(&format!("{}: {}", escape(name), escape(value)))));
        }

        if let Some(cookies) = cookie_token(&self.request.cookies) {
            tokens.push(cookies);
        }

        if !self.request.form_fields.is_empty() {
            for (name, value) in &self.request.form_fields {
                tokens.push(form_token(name, value));
            }
        } else if let Some(body) = &self.request.body {
            tokens.push(data_token(body)?);
        }

        tokens.push(quoted(&target_url(self.url, &self.request.query_parameters)?));

        Ok(tokens)
    }
}

fn cookie_token(cookies: &IndexMap<String, String>) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }

    let pairs: Vec<String> = cookies
        .iter()
        .map(|(name, value)| format!("{}={}", escape(name), escape(value)))
        .collect();

    Some(format!("-b {}", quoted(&pairs.join("; "))))
}

fn form_token(name: &str, value: &FormValue) -> String {
    let field = match value {
        FormValue::File(path) => format!("{}=@{}", escape(name), escape(&path.to_string_lossy())),
        FormValue::Value(text) => format!("{}={}", escape(name), escape(text)),
    };
    format!("-F {}", quoted(&field))
}

fn data_token(body: &Body) -> Result<String> {
    Ok(format!("--data '{}'", body.encode()?))
}

/// Append the encoded query parameters to `url`
///
/// Values are stringified first; arrays and objects have no single string
/// form and are rejected.
pub fn target_url(url: &str, query: &IndexMap<String, JsonValue>) -> Result<String> {
    if query.is_empty() {
        return Ok(url.to_string());
    }

    let pairs = query
        .iter()
        .map(|(key, value)| -> Result<(String, String)> {
            Ok((key.clone(), stringify_query_value(key, value)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let encoded = serde_urlencoded::to_string(&pairs)
        .map_err(|e| CurlgenError::invalid(format!("Failed to encode query parameters: {}", e)))?;

    // The query goes before any fragment
    let (base, fragment) = url.split_at(url.find('#').unwrap_or(url.len()));
    let separator = if base.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}{}", base, separator, encoded, fragment))
}

fn stringify_query_value(key: &str, value: &JsonValue) -> Result<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        JsonValue::Null => Ok(String::new()),
        JsonValue::Array(_) | JsonValue::Object(_) => Err(CurlgenError::invalid(format!(
            "Query parameter '{}' must be a string, number or boolean",
            key
        ))),
    }
}
