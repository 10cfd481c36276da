//! Call-site helpers on `Result` and `Option`
//!
//! These record the caller's file and line through `#[track_caller]`; use the macros when the
//! enclosing function name should be recorded as well.

use super::message::Message;
use super::types::{Code, Error, Location, Result};

/// Extension methods for results carrying an error chain
pub trait ResultExt<T, C: Code> {
    /// Rethrow any error with a new code and message
    ///
    /// # Errors
    ///
    /// Returns the extended chain if `self` is an error.
    fn rethrow_on_err(self, code: C, message: impl Into<Message>) -> Result<T, C>;

    /// Rethrow any error with its own code and a description of the failed step
    ///
    /// # Errors
    ///
    /// Returns the extended chain if `self` is an error.
    fn trace(self, description: impl Into<Message>) -> Result<T, C>;

    /// Handle any error locally, then dispose it
    fn handle_err<F>(self, handler: F) -> T
    where
        F: FnOnce(&Error<C>) -> T;
}

impl<T, C: Code> ResultExt<T, C> for Result<T, C> {
    #[track_caller]
    fn rethrow_on_err(self, code: C, message: impl Into<Message>) -> Result<T, C> {
        let location = Location::caller();
        self.map_err(|err| err.rethrow(location, code, message))
    }

    #[track_caller]
    fn trace(self, description: impl Into<Message>) -> Result<T, C> {
        let location = Location::caller();
        self.map_err(|err| {
            let code = err.code().clone();
            err.rethrow(location, code, description)
        })
    }

    fn handle_err<F>(self, handler: F) -> T
    where
        F: FnOnce(&Error<C>) -> T,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                let value = handler(&err);
                err.dispose();
                value
            }
        }
    }
}

/// Extension methods for turning a missing value into a throw
pub trait OptionExt<T> {
    /// Throw with `code` and `message` if the value is missing
    ///
    /// # Errors
    ///
    /// Returns a new chain if `self` is `None`.
    fn or_throw<C: Code>(self, code: C, message: impl Into<Message>) -> Result<T, C>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn or_throw<C: Code>(self, code: C, message: impl Into<Message>) -> Result<T, C> {
        let location = Location::caller();
        self.ok_or_else(|| Error::throw(location, code, message))
    }
}
