//! Error types for echo.
//!
//! Formatting never fails; the only failure domain is the output stream.
//! Errors map to process exit codes via [`EchoError::exit_code`].

use std::io;
use thiserror::Error;

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Standard output could not be written
    WriteError = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Main error type for echo.
#[derive(Error, Debug)]
pub enum EchoError {
    /// Writing to the output stream failed (closed pipe, full device, ...).
    #[error("write error: {0}")]
    Write(#[from] io::Error),
}

impl EchoError {
    /// Exit code the process should terminate with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Write(_) => ExitCode::WriteError,
        }
    }

    /// True when the reader of our output went away (`EPIPE`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Write(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

/// Result type alias for echo operations.
pub type Result<T> = std::result::Result<T, EchoError>;
