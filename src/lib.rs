//! echo - print arguments to standard output.
//!
//! Arguments are joined with single spaces and written as one line. A lone
//! `--version` argument prints `echo <version>` instead, where the version
//! identifier is fixed at build time.

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::{Decision, decide};
pub use error::{EchoError, ExitCode, Result};
