//! Environment variable-based configuration
//!
//! Supported variables:
//! - `ERRCHAIN_TRACE_BASENAME` - print file names without directories (`true`/`false`)
//! - `ERRCHAIN_TRACE_MAX_MESSAGE` - elide printed messages beyond this many bytes
//! - `ERRCHAIN_FATAL_EXIT_CODE` - exit with this status instead of aborting on fatal errors
//! - `ERRCHAIN_BACKTRACE` - capture a native backtrace on every throw (`true`/`false`)
//!
//! Logging levels are configured separately through `RUST_LOG`. Invalid values are reported
//! by [`ErrorLog::init`](crate::ErrorLog::init) once a logger is installed.

use once_cell::sync::Lazy;
use std::env;
use thiserror::Error;

/// Variable selecting basename-only file names in printed traces
pub const ENV_TRACE_BASENAME: &str = "ERRCHAIN_TRACE_BASENAME";
/// Variable limiting printed message length
pub const ENV_TRACE_MAX_MESSAGE: &str = "ERRCHAIN_TRACE_MAX_MESSAGE";
/// Variable selecting an exit status for fatal escalation
pub const ENV_FATAL_EXIT_CODE: &str = "ERRCHAIN_FATAL_EXIT_CODE";
/// Variable switching backtrace capture on throw
pub const ENV_BACKTRACE: &str = "ERRCHAIN_BACKTRACE";

/// Environment configuration, or defaults plus the reason the environment was rejected
struct Loaded {
    config: Config,
    error: Option<ConfigError>,
}

impl Loaded {
    fn resolve(result: Result<Config, ConfigError>) -> Self {
        match result {
            Ok(config) => Self {
                config,
                error: None,
            },
            Err(e) => Self {
                config: Config::default(),
                error: Some(e),
            },
        }
    }
}

static GLOBAL: Lazy<Loaded> = Lazy::new(|| Loaded::resolve(load_from_env()));

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set to something that does not parse
    #[error("Invalid {name} value: {value:?}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Rejected value
        value: String,
    },
}

/// How frames are rendered by [`Error::print_with`](crate::Error::print_with)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Print only the file name, not its directories
    pub basename: bool,
    /// Elide messages longer than this many bytes, stating how many were left out
    pub max_message_bytes: Option<usize>,
}

/// Process-wide settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rendering used for fatal stack traces
    pub print: PrintOptions,
    /// Exit status for fatal escalation; `None` aborts the process.
    ///
    /// Values that [`is_failure_exit_code`] rejects are ignored and the process aborts.
    pub fatal_exit_code: Option<i32>,
    /// Capture a native backtrace on throw (only with the `full-backtrace` feature).
    ///
    /// Capturing walks the stack and allocates on every throw, including throws that are
    /// handled immediately.
    pub capture_backtrace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            print: PrintOptions::default(),
            fatal_exit_code: None,
            capture_backtrace: true,
        }
    }
}

impl Config {
    /// Configuration read from the environment on first use.
    ///
    /// Falls back to [`Config::default`] when the environment holds invalid values; see
    /// [`load_error`].
    #[must_use]
    pub fn global() -> &'static Config {
        &GLOBAL.config
    }
}

/// Why the environment configuration behind [`Config::global`] was rejected, if it was
#[must_use]
pub fn load_error() -> Option<&'static ConfigError> {
    GLOBAL.error.as_ref()
}

/// Whether `code` reaches the parent as a non-zero exit status.
///
/// Unix keeps only the low eight bits, so 256 or -256 would read as success.
#[must_use]
pub fn is_failure_exit_code(code: i32) -> bool {
    code & 0xff != 0
}

/// Load configuration from environment variables
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if a variable is set but does not parse.
pub fn load_from_env() -> Result<Config, ConfigError> {
    load_from(|name| env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if a variable is set but does not parse.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(value) = lookup(ENV_TRACE_BASENAME) {
        config.print.basename = parse_bool(ENV_TRACE_BASENAME, value)?;
    }

    if let Some(value) = lookup(ENV_TRACE_MAX_MESSAGE) {
        let limit: usize = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: ENV_TRACE_MAX_MESSAGE,
                value,
            })?;
        config.print.max_message_bytes = Some(limit);
    }

    if let Some(value) = lookup(ENV_FATAL_EXIT_CODE) {
        let code: i32 = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: ENV_FATAL_EXIT_CODE,
                value: value.clone(),
            })?;
        if !is_failure_exit_code(code) {
            return Err(ConfigError::InvalidValue {
                name: ENV_FATAL_EXIT_CODE,
                value,
            });
        }
        config.fatal_exit_code = Some(code);
    }

    if let Some(value) = lookup(ENV_BACKTRACE) {
        config.capture_backtrace = parse_bool(ENV_BACKTRACE, value)?;
    }

    Ok(config)
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue { name, value }),
    }
}
