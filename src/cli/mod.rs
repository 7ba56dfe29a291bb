//! Invocation wiring: argument capture, formatting, output.

use std::ffi::OsString;
use std::io::Write;

use crate::core::formatter::{self, Decision};
use crate::core::sink::LineSink;
use crate::error::Result;

/// Convert raw process arguments to strings.
///
/// Arguments that are not valid UTF-8 are converted lossily so that every
/// invocation still produces output.
#[must_use]
pub fn collect_args<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .map(|arg| {
            arg.into_string()
                .unwrap_or_else(|os| os.to_string_lossy().into_owned())
        })
        .collect()
}

/// Format `args` and write the result to `sink`.
///
/// Returns the decision so the caller can apply the termination contract.
pub fn execute<S, W>(args: &[S], version_id: &str, sink: &mut LineSink<W>) -> Result<Decision>
where
    S: AsRef<str>,
    W: Write,
{
    let decision = formatter::decide(args, version_id);
    sink.write_line(&decision.output)?;
    Ok(decision)
}
