//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for curlgen.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Turn a request description into a shell-safe curl command
#[derive(Parser, Debug, Clone)]
#[command(name = "curlgen", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // POSITIONAL ARGUMENTS
    // =========================================================================

    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    /// Defaults to GET, or POST if a body or form field is present
    #[arg(value_name = "METHOD")]
    pub method: Option<String>,

    /// The URL, including its scheme (https://...)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    // =========================================================================
    // REQUEST PARTS
    // =========================================================================

    /// Header as "Name: value" (repeatable, order is kept)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Query parameter as key=value (repeatable)
    #[arg(short = 'q', long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// Cookie as name=value (repeatable)
    #[arg(short = 'b', long = "cookie", value_name = "NAME=VALUE")]
    pub cookies: Vec<String>,

    /// Raw request body, emitted verbatim
    #[arg(short = 'd', long = "data", value_name = "DATA", conflicts_with = "json")]
    pub data: Option<String>,

    /// JSON object body, re-encoded compactly
    #[arg(short = 'j', long = "json", value_name = "JSON")]
    pub json: Option<String>,

    /// Multipart field as name=value, or name=@path for a file (repeatable)
    #[arg(short = 'F', long = "form", value_name = "NAME=VALUE")]
    pub form: Vec<String>,

    // =========================================================================
    // TRANSPORT FLAGS
    // =========================================================================

    /// Emit --insecure
    #[arg(short = 'k', long = "insecure", action = ArgAction::SetTrue)]
    pub insecure: bool,

    /// Emit --compressed
    #[arg(long = "compressed", action = ArgAction::SetTrue)]
    pub compressed: bool,

    /// Emit --verbose
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Emit --location
    #[arg(short = 'L', long = "location", action = ArgAction::SetTrue)]
    pub location: bool,

    /// Emit --max-time with this many seconds
    #[arg(short = 'm', long = "max-time", value_name = "SECONDS")]
    pub max_time: Option<u64>,

    /// Extra raw curl flag, emitted verbatim (repeatable)
    #[arg(long = "flag", value_name = "FLAG", allow_hyphen_values = true)]
    pub flags: Vec<String>,

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Replace sensitive header values with ********
    #[arg(long = "mask", action = ArgAction::SetTrue)]
    pub mask: bool,

    /// Additional header name to treat as sensitive (repeatable)
    #[arg(long = "sensitive-header", value_name = "NAME")]
    pub sensitive_headers: Vec<String>,

    /// Put each token on its own line
    #[arg(long = "formatted", action = ArgAction::SetTrue)]
    pub formatted: bool,

    /// When to colorize the output
    #[arg(long = "color", value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    // =========================================================================
    // CONFIGURATION & TROUBLESHOOTING
    // =========================================================================

    /// Read defaults from this file instead of the user config file
    #[arg(long = "config", value_name = "PATH", env = "CURLGEN_CONFIG", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore the config file and use built-in defaults
    #[arg(long = "no-config", action = ArgAction::SetTrue)]
    pub no_config: bool,

    /// Print debug logs to stderr (RUST_LOG refines the filter)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

/// Output colorization
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colorize when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
