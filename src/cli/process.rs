//! Post-processing argument logic
//!
//! Turns parsed CLI arguments into a method, a URL and [`CreateOptions`].

use serde_json::Value as JsonValue;

use crate::cli::args::Args;
use crate::errors::{CurlgenError, Result};
use crate::http;
use crate::options::TransportFlags;
use crate::request::{Body, CreateOptions, FormValue};

/// Processed arguments ready for command generation
#[derive(Debug, Clone)]
pub struct ProcessedArgs {
    /// HTTP method
    pub method: String,
    /// URL as given
    pub url: String,
    /// Everything else about the request
    pub options: CreateOptions,
}

/// Process raw CLI arguments into a usable form
pub fn process_args(args: &Args) -> Result<ProcessedArgs> {
    // A single positional argument is the URL
    let (explicit_method, url) = match (&args.method, &args.url) {
        (Some(m), Some(u)) => (Some(m.clone()), u.clone()),
        (Some(u), None) => (None, u.clone()),
        (None, _) => return Err(CurlgenError::invalid("URL is required")),
    };

    let mut options = CreateOptions::new();

    for header in &args.headers {
        let (name, value) = split_header(header)?;
        options.headers.insert(name, value);
    }

    for item in &args.query {
        let (key, value) = split_pair(item, "query parameter")?;
        options.query_parameters.insert(key, JsonValue::String(value));
    }

    for item in &args.cookies {
        let (name, value) = split_pair(item, "cookie")?;
        options.cookies.insert(name, value);
    }

    for item in &args.form {
        let (name, value) = split_pair(item, "form field")?;
        let value = match value.strip_prefix('@') {
            Some(path) => FormValue::file(path),
            None => FormValue::Value(value),
        };
        options.form_fields.insert(name, value);
    }

    if let Some(ref raw) = args.data {
        options.body = Some(Body::Raw(raw.clone()));
    } else if let Some(ref json) = args.json {
        let value: JsonValue = serde_json::from_str(json)
            .map_err(|e| CurlgenError::invalid(format!("--json is not valid JSON: {}", e)))?;
        options.body = Some(Body::try_from(value)?);
    }

    let flags = TransportFlags {
        insecure: args.insecure,
        compressed: args.compressed,
        verbose: args.verbose,
        location: args.location,
        max_time: args.max_time,
        custom_flags: args.flags.clone(),
    };
    if flags != TransportFlags::default() {
        options.transport_flags = Some(flags);
    }

    // Flags only override the configured defaults when given
    if args.mask {
        options.mask_sensitive = Some(true);
    }
    if args.formatted {
        options.formatted = Some(true);
    }
    // The command is printed on stdout; the sink only sees it under --debug
    options.show_debug_output = Some(args.debug);

    let has_data = options.body.is_some() || !options.form_fields.is_empty();
    let method = match explicit_method {
        Some(m) => m.to_uppercase(),
        None => http::infer(has_data).to_string(),
    };

    Ok(ProcessedArgs { method, url, options })
}

/// Split "Name: value" into its parts; the value may be empty
fn split_header(header: &str) -> Result<(String, String)> {
    let (name, value) = header
        .split_once(':')
        .ok_or_else(|| CurlgenError::invalid(format!("Invalid header '{}': expected \"Name: value\"", header)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CurlgenError::invalid(format!("Invalid header '{}': empty name", header)));
    }

    Ok((name.to_string(), value.trim().to_string()))
}

/// Split "key=value" at the first '='
fn split_pair(item: &str, what: &str) -> Result<(String, String)> {
    match item.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(CurlgenError::invalid(format!("Invalid {} '{}': expected key=value", what, item))),
    }
}
