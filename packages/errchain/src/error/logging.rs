//! Structured logging for the error lifecycle
//!
//! Provides env_logger-based logging through the standard log crate. Records carry the
//! code, location and message length of a frame, never the message body itself, since
//! messages may be arbitrarily large.

use super::message::MessageError;
use super::types::{Code, Error};
use crate::config;
use log::{debug, error, info, trace, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging for error construction, handling and escalation
pub struct ErrorLog;

impl ErrorLog {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=trace` - Every throw, rethrow and dispose
    /// - `RUST_LOG=debug` - Handled errors
    /// - `RUST_LOG=error` - Only fatal escalations
    ///
    /// Rejected `ERRCHAIN_*` settings are reported here, after the logger is installed.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
            if let Some(e) = config::load_error() {
                warn!("Ignoring errchain environment configuration: {e}");
            }
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a new chain
    pub fn log_throw<C: Code>(err: &Error<C>) {
        trace!(
            "throw at {}:{} (code: {:?}, message_len: {})",
            err.file(),
            err.line(),
            err.code(),
            err.message().len()
        );
    }

    /// Log a frame added on top of an existing chain
    pub fn log_rethrow<C: Code>(err: &Error<C>) {
        trace!(
            "rethrow at {}:{} (code: {:?}, depth: {})",
            err.file(),
            err.line(),
            err.code(),
            err.depth()
        );
    }

    /// Log a chain that a caller handled and released
    pub fn log_dispose<C: Code>(err: &Error<C>) {
        debug!(
            "handled error from {}:{} (code: {:?}, depth: {})",
            err.file(),
            err.line(),
            err.code(),
            err.depth()
        );
    }

    /// Log a message that had to be replaced by its static stand-in
    pub fn log_degraded_message(err: &MessageError) {
        warn!("Error message degraded: {err}");
    }

    /// Log the start of a fatal escalation
    pub fn log_fatal<C: Code>(err: &Error<C>) {
        error!(
            "Fatal: unhandled error from {}:{} (code: {:?}, depth: {})",
            err.file(),
            err.line(),
            err.code(),
            err.depth()
        );
    }
}
