//! Core formatting, output and build metadata.

pub mod build_info;
pub mod formatter;
pub mod logging;
pub mod sink;

pub use build_info::{BuildInfo, VERSION_ID};
pub use formatter::{Decision, Rule, decide};
pub use sink::LineSink;
