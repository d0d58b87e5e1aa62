//! curlgen library interface
//!
//! Turns a structured description of an HTTP request into a single,
//! shell-safe `curl` command line for debugging and sharing API calls.
//!
//! ```
//! use curlgen::{create, CreateOptions};
//!
//! let cmd = create(
//!     "GET",
//!     "https://api.example.com/secure",
//!     CreateOptions::new()
//!         .header("Authorization", "Bearer secret-token-12345")
//!         .header("User-Agent", "MyApp/1.0")
//!         .mask(true)
//!         .debug(false),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     cmd,
//!     r#"curl -X GET -H "Authorization: ********" -H "User-Agent: MyApp/1.0" "https://api.example.com/secure""#
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`generator`] - Entry point (`create`, `create_with_config`)
//! - [`command`] - Token emission in fixed order
//! - [`escape`], [`mask`], [`options`], [`validate`] - Building blocks
//! - [`config`] - Process-wide defaults and the config file
//! - [`adapters`] - Commands from `reqwest`, `http` and JSON-shaped requests
//! - [`errors`] - Error types (CurlgenError, Result)
//! - [`core`] - Command-line driver

pub mod adapters;
pub mod cli;
pub mod command;
pub mod config;
pub mod core;
pub mod errors;
pub mod escape;
pub mod generator;
pub mod highlight;
pub mod http;
pub mod mask;
pub mod options;
pub mod request;
pub mod status;
pub mod validate;

pub use adapters::{from_request_like, RequestLike, RequestParts};
pub use config::Config;
pub use errors::{CurlgenError, Result};
pub use generator::{create, create_with_config};
pub use options::TransportFlags;
pub use request::{Body, CreateOptions, FormValue};
