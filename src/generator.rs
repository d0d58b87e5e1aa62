//! Entry point: resolve defaults, build the command, emit debug output

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::command::CommandBuilder;
use crate::config::{self, Config};
use crate::errors::Result;
use crate::options::merge;
use crate::request::CreateOptions;

/// Prefix placed before the command when it is handed to the logging sink
pub const DEBUG_BANNER: &str = "cURL command:";

/// Generate a curl command using the global configuration for any option
/// left unset in `options`
///
/// # Examples
/// ```
/// use curlgen::{create, CreateOptions};
///
/// let cmd = create("GET", "https://api.example.com/posts", CreateOptions::new().query("userId", 1).debug(false)).unwrap();
/// assert_eq!(cmd, r#"curl -X GET "https://api.example.com/posts?userId=1""#);
/// ```
pub fn create(method: &str, url: &str, options: CreateOptions) -> Result<String> {
    let config = config::global();
    create_with_config(&config, method, url, options)
}

/// Generate a curl command against an explicit configuration
pub fn create_with_config(config: &Config, method: &str, url: &str, options: CreateOptions) -> Result<String> {
    let flags = merge(options.transport_flags.as_ref(), config.transport_flags.as_ref());
    let mask = options.mask_sensitive.unwrap_or(config.mask_sensitive);
    let formatted = options.formatted.unwrap_or(config.formatted);
    let show_debug_output = options.show_debug_output.unwrap_or(config.show_debug_output);

    let command = CommandBuilder::new(method, url, &options, &config.sensitive_headers)
        .flags(flags.as_deref())
        .mask(mask)
        .formatted(formatted)
        .build()?;

    if show_debug_output {
        emit_debug(config, &command);
    }

    Ok(command)
}

/// Hand a generated command to the configured sink.
///
/// A panicking sink is caught and logged; the command is returned to the
/// caller regardless.
pub fn emit_debug(config: &Config, command: &str) {
    let message = format!("{}\n{}", DEBUG_BANNER, command);

    match &config.logging_sink {
        Some(sink) => {
            if panic::catch_unwind(AssertUnwindSafe(|| sink(&message))).is_err() {
                warn!("Logging sink panicked while receiving a curl command");
            }
        }
        None => debug!(target: "curlgen", "{}", message),
    }
}
