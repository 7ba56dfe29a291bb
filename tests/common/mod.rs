//! Shared helpers for integration tests.
//!
//! - `log_capture`: thread-scoped tracing capture for library calls
//! - `echo_cmd`: the built `echo` binary with logging env cleared

#![allow(dead_code)]

pub mod log_capture;

use assert_cmd::Command;

/// Log-related variables cleared before every binary run so the host
/// environment cannot leak diagnostics into stderr.
pub const LOG_ENV_VARS: &[&str] = &["RUST_LOG", "ECHO_LOG", "ECHO_LOG_FORMAT", "ECHO_LOG_FILE"];

/// `echo` binary with a clean logging environment.
#[allow(deprecated)]
pub fn echo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("echo").expect("echo binary is built");
    for var in LOG_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}
