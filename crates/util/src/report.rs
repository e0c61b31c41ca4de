//! Defines [failure], for leaving a command-line program with an error.

use std::fmt::Display;
use std::process::ExitCode;

/// Print `message` and its `cause` to stderr, log them as an error, and
/// produce [ExitCode::FAILURE].
#[track_caller]
pub fn failure(message: impl Display, cause: impl Display) -> ExitCode {
    crate::debug_log_error!("{message}: {cause}");
    eprintln!("{message}: {cause}");
    ExitCode::FAILURE
}
