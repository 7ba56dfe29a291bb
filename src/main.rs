//! echo - print arguments to standard output.
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use std::process::ExitCode;

use echo::cli;
use echo::core::build_info::{BuildInfo, VERSION_ID};
use echo::core::logging::{self, LogConfig};
use echo::core::sink;

fn main() -> ExitCode {
    logging::init(&LogConfig::from_env());
    tracing::debug!(build = %BuildInfo::current(), "starting");

    let args = cli::collect_args(std::env::args_os().skip(1));
    let mut out = sink::stdout();

    match cli::execute(&args, VERSION_ID, &mut out) {
        Ok(decision) if decision.exit_now => std::process::exit(decision.code),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_broken_pipe() {
                tracing::warn!("{}", e);
            } else {
                tracing::error!("{}", e);
            }
            eprintln!("echo: {e}");
            e.exit_code().into()
        }
    }
}
