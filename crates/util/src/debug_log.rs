//! Contains tools for debug-mode logging.
//!
//! Logging cannot be enabled when `cfg!(debug_assertions)` is false, otherwise
//! it's enabled by default.

pub mod panic_on_errors;

use std::fmt::{self, Arguments, Display, Formatter};
use std::io::{self, IsTerminal, Write};
use std::panic::Location;
#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicBool, Ordering};

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Log some info to stdout if both `cfg!(debug_assertions)` and [enabled] are
/// true.
#[macro_export]
macro_rules! debug_log_info {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        if $crate::debug_log::enabled() {
            $crate::debug_log::emit($crate::debug_log::Level::Info, format_args!($($arg)*));
        }
    }};
}

/// Log a warning to stderr if both `cfg!(debug_assertions)` and [enabled] are
/// true.
#[macro_export]
macro_rules! debug_log_warning {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        if $crate::debug_log::enabled() {
            $crate::debug_log::emit($crate::debug_log::Level::Warning, format_args!($($arg)*));
        }
    }};
}

/// Log an error to stderr if both `cfg!(debug_assertions)` and [enabled] are
/// true. Panics afterwards if [panic_on_errors::enabled] is true.
#[macro_export]
macro_rules! debug_log_error {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        if $crate::debug_log::enabled() {
            $crate::debug_log::emit($crate::debug_log::Level::Error, format_args!($($arg)*));

            if $crate::debug_log::panic_on_errors::enabled() {
                panic!("Panicking on error logging enabled.");
            }
        }
    }};
}

/// Severity of a debug log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[35m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        })
    }
}

/// Write a single record. Info goes to stdout, everything else to stderr.
///
/// This function gets called by the debug log macros (e.g. [debug_log_info])
/// and generally shouldn't be called directly.
#[track_caller]
pub fn emit(level: Level, message: Arguments<'_>) {
    let location = Location::caller();

    let result = if level == Level::Info {
        let stdout = io::stdout();
        let colored = stdout.is_terminal();
        write_record(&mut stdout.lock(), colored, level, message, location)
    } else {
        let stderr = io::stderr();
        let colored = stderr.is_terminal();
        write_record(&mut stderr.lock(), colored, level, message, location)
    };

    // Nowhere left to report a failed log write.
    let _ = result;
}

fn write_record(
    out: &mut impl Write,
    colored: bool,
    level: Level,
    message: Arguments<'_>,
    location: &Location<'_>,
) -> io::Result<()> {
    let (blue, tag_color, reset_color) = if colored {
        ("\x1b[34m", level.color(), "\x1b[0m")
    } else {
        ("", "", "")
    };

    writeln!(
        out,
        "{blue}DEBUG LOG{reset_color} [{tag_color}{level}{reset_color}]: {message}"
    )?;
    writeln!(out, "{}", where_and_when(location, blue, reset_color))
}

/// The location of the caller, the time of the call, and the executable
/// (argv), all as one indented block.
pub fn where_and_when(location: &Location<'_>, color: &str, reset_color: &str) -> String {
    let when = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|e| format!("Unknown time: {e}"));

    let exec = std::env::args().collect::<Vec<_>>().join(" ");

    format!("\tWhere: {color}{location}{reset_color}\n")
        + format!("\tTime:  {color}{when}{reset_color}\n").as_str()
        + format!("\tExec.: {color}{exec}{reset_color}").as_str()
}

/// Whether logging is enabled or not.
///
/// Logging cannot be enabled when `cfg!(debug_assertions)` is false, otherwise
/// it's enabled by default.
#[inline(always)]
pub fn enabled() -> bool {
    #[cfg(debug_assertions)]
    return ENABLED.load(Ordering::Relaxed);

    #[cfg(not(debug_assertions))]
    return false;
}

/// Disable logging.
#[inline(always)]
pub fn disable() {
    #[cfg(debug_assertions)]
    ENABLED.store(false, Ordering::Relaxed);
}

/// Enable logging.
///
/// Trying to enable logging when `cfg!(debug_assertions)` is false will
/// result in the program panicking.
#[inline(always)]
pub fn enable() {
    #[cfg(not(debug_assertions))]
    panic!("Debug logging cannot be enabled.");

    #[cfg(debug_assertions)]
    ENABLED.store(true, Ordering::Relaxed);
}

#[cfg(debug_assertions)]
static ENABLED: AtomicBool = AtomicBool::new(true);
