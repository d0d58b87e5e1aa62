//! Command-line driver
//!
//! Parses arguments, loads the config file, generates the command and
//! prints it.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{process_args, Args, ColorChoice};
use crate::config::Config;
use crate::errors::{CurlgenError, Result};
use crate::generator::create_with_config;
use crate::highlight::format_curl_pretty;
use crate::http;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
pub fn run(args: Vec<String>) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    if parsed.debug {
        init_tracing();
    }

    match program(&parsed) {
        Ok(output) => {
            println!("{}", output);
            ExitStatus::Success
        }
        Err(e) => handle_error(e),
    }
}

/// Generate the (possibly colorized) command for parsed arguments
pub fn program(args: &Args) -> Result<String> {
    let mut config = load_config(args)?;
    config.sensitive_headers.extend(&args.sensitive_headers);
    debug!(?config, "Resolved configuration");

    let processed = process_args(args)?;
    if !http::is_standard(&processed.method) {
        debug!(method = %processed.method, "Non-standard HTTP method");
    }

    let command = create_with_config(&config, &processed.method, &processed.url, processed.options)?;

    if use_color(args.color) {
        Ok(format_curl_pretty(&command))
    } else {
        Ok(command)
    }
}

fn load_config(args: &Args) -> Result<Config> {
    if args.no_config {
        return Ok(Config::default());
    }

    match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => atty::is(atty::Stream::Stdout),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("curlgen=debug"));

    // Ignore failure: a subscriber may already be installed by an embedding host
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_error(error: CurlgenError) -> ExitStatus {
    eprintln!("Error: {}", error);

    // All errors return the same exit code (1) following Unix conventions
    ExitStatus::Error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_for(argv: &[&str]) -> Result<String> {
        let mut full = vec!["curlgen", "--no-config", "--color", "never"];
        full.extend_from_slice(argv);
        program(&Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_program_plain() {
        let out = program_for(&["https://api.example.com/posts", "-q", "userId=1"]).unwrap();
        assert_eq!(out, r#"curl -X GET "https://api.example.com/posts?userId=1""#);
    }

    #[test]
    fn test_program_extra_sensitive_header() {
        let out = program_for(&[
            "https://example.com",
            "-H",
            "X-Internal: abc",
            "--mask",
            "--sensitive-header",
            "x-internal",
        ])
        .unwrap();
        assert_eq!(out, r#"curl -X GET -H "X-Internal: ********" "https://example.com""#);
    }

    #[test]
    fn test_program_invalid_url() {
        let err = program_for(&["invalid-url"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_program_color() {
        let args = Args::try_parse_from(["curlgen", "--no-config", "--color", "always", "https://example.com"]).unwrap();
        let out = program(&args).unwrap();
        assert!(out.contains("\x1b["));
    }
}
