//! Fatal escalation boundary
//!
//! The only place where an unhandled chain ends the process. Call it from the outermost
//! layer of an application (typically `main`), never from reusable library code.

use crate::config::{is_failure_exit_code, Config, PrintOptions};
use crate::error::{Code, Error, ErrorLog, Location, Message};
use log::error;
use std::io;
use std::process;

/// Write the full chain to `sink` and flush it, without terminating.
///
/// The escalation header goes to the log, so `sink` receives exactly one line per frame.
///
/// # Errors
///
/// Returns any I/O error raised by `sink`.
pub fn report<C, W>(err: &Error<C>, sink: &mut W, options: &PrintOptions) -> io::Result<()>
where
    C: Code,
    W: io::Write + ?Sized,
{
    ErrorLog::log_fatal(err);
    err.print_with(sink, options)?;
    sink.flush()
}

/// Print `err` and terminate with a non-zero status.
///
/// Aborts unless `ERRCHAIN_FATAL_EXIT_CODE` selects an exit status the parent will see as a
/// failure.
pub fn terminate<C, W>(err: &Error<C>, sink: &mut W) -> !
where
    C: Code,
    W: io::Write + ?Sized,
{
    let config = Config::global();
    if let Err(e) = report(err, sink, &config.print) {
        error!("Failed to write stack trace: {e}");
    }
    match config.fatal_exit_code {
        Some(code) if is_failure_exit_code(code) => process::exit(code),
        _ => process::abort(),
    }
}

/// Unwrap a result at an unrecoverable boundary.
///
/// `Ok` yields its value; an error chain is printed to `sink` and the process terminates.
pub fn escalate<T, C, W>(result: Result<T, Error<C>>, sink: &mut W) -> T
where
    C: Code,
    W: io::Write + ?Sized,
{
    match result {
        Ok(value) => value,
        Err(err) => terminate(&err, sink),
    }
}

/// Like [`escalate`], but first records the escalating call site as a frame.
pub fn escalate_at<T, C, W>(
    location: Location,
    description: impl Into<Message>,
    result: Result<T, Error<C>>,
    sink: &mut W,
) -> T
where
    C: Code,
    W: io::Write + ?Sized,
{
    match result {
        Ok(value) => value,
        Err(err) => {
            let code = err.code().clone();
            terminate(&err.rethrow(location, code, description), sink)
        }
    }
}
