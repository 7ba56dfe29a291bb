//! Output sink: writes one line to a byte stream.

use std::io::Write;

use tracing::trace;

use crate::error::Result;

/// Writes formatted output followed by a single `\n`.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write `line` and a trailing newline, then flush.
    ///
    /// The line is written as-is, even when empty.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        trace!(bytes = line.len() + 1, "wrote output line");
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Sink bound to the process's standard output.
#[must_use]
pub fn stdout() -> LineSink<std::io::StdoutLock<'static>> {
    LineSink::new(std::io::stdout().lock())
}
