//! Argument formatter.
//!
//! Turns the raw argument sequence into the line to print and the
//! termination decision. Total over every input: no path fails.

use tracing::debug;

use crate::error::ExitCode;

/// The literal token that switches to version output.
pub const VERSION_FLAG: &str = "--version";

/// Which formatting rule produced a [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Sole argument was `--version`.
    Version,
    /// No arguments.
    Empty,
    /// Arguments joined with single spaces.
    Join,
}

impl Rule {
    /// Stable name used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Empty => "empty",
            Self::Join => "join",
        }
    }

    /// Select the rule for an argument sequence. First match wins.
    #[must_use]
    pub fn classify<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [only] if only.as_ref() == VERSION_FLAG => Self::Version,
            [] => Self::Empty,
            _ => Self::Join,
        }
    }
}

/// Result of formatting one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Line to write, without the trailing newline.
    pub output: String,
    /// Terminate with `code` right after writing instead of returning normally.
    pub exit_now: bool,
    /// Status to terminate with when `exit_now` is set.
    pub code: i32,
}

impl Decision {
    fn new(output: String, exit_now: bool) -> Self {
        Self {
            output,
            exit_now,
            code: ExitCode::Success.into(),
        }
    }
}

/// Decide what to print for `args`.
///
/// `version_id` is the build-time identifier; it is only read when the
/// version rule matches. `["--version", "extra"]` is echoed verbatim because
/// the flag only counts as the sole argument.
#[must_use]
pub fn decide<S: AsRef<str>>(args: &[S], version_id: &str) -> Decision {
    let rule = Rule::classify(args);

    let decision = match rule {
        Rule::Version => Decision::new(format!("echo {version_id}"), true),
        Rule::Empty => Decision::new(String::new(), false),
        Rule::Join => Decision::new(join(args), false),
    };

    debug!(
        rule = rule.as_str(),
        arg_count = args.len(),
        output_len = decision.output.len(),
        exit_now = decision.exit_now,
        "formatted arguments"
    );

    decision
}

fn join<S: AsRef<str>>(args: &[S]) -> String {
    let capacity = args.iter().map(|a| a.as_ref().len()).sum::<usize>() + args.len();
    let mut out = String::with_capacity(capacity);
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(arg.as_ref());
    }
    out
}
