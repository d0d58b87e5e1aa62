//! Common test utilities for curlgen CLI integration tests
//!
//! Runs the compiled binary with the user config file disabled unless a
//! test opts into a specific config file.

#![allow(dead_code)]

use assert_cmd::Command;

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit status code
    pub exit_status: ExitStatus,
}

impl CliResponse {
    /// The printed command without the trailing newline
    pub fn command(&self) -> &str {
        self.stdout.trim_end_matches('\n')
    }
}

/// A fresh command for the curlgen binary
pub fn curlgen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("curlgen").expect("curlgen binary not built");
    cmd.env_remove("CURLGEN_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Run curlgen with built-in defaults and no colors
pub fn curlgen(args: &[&str]) -> CliResponse {
    let mut cmd = curlgen_cmd();
    cmd.args(["--no-config", "--color", "never"]).args(args);
    run(cmd)
}

/// Run a prepared command and capture its output
pub fn run(mut cmd: Command) -> CliResponse {
    let output = cmd.output().expect("failed to run curlgen");
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_status: output.status.code().unwrap_or(1).into(),
    }
}
