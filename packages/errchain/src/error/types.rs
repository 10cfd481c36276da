//! Core error types and definitions

use super::message::Message;
use std::fmt;

/// Application-defined failure category carried by every frame.
///
/// Implemented for every cloneable, comparable, debuggable type, so plain integers and
/// application enums both work. The chain never interprets a code beyond comparing it.
pub trait Code: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {}

impl<T> Code for T where T: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {}

/// Source position where a frame was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub(super) file: &'static str,
    pub(super) line: u32,
    pub(super) function: Option<&'static str>,
}

/// One failure frame, owning the frame it wraps.
///
/// The head of a chain is the most recent rethrow; following [`Error::cause`] leads to the
/// original throw. An `Error` has exactly one owner and is never cloned; dropping or
/// [disposing](Error::dispose) the head releases the whole chain.
#[derive(Debug)]
pub struct Error<C = i32> {
    pub(super) code: C,
    pub(super) location: Location,
    pub(super) message: Message,
    pub(super) cause: Option<Box<Error<C>>>,
    /// Native backtrace, captured only by the original throw
    #[cfg(feature = "full-backtrace")]
    pub(super) backtrace: Option<backtrace::Backtrace>,
}

/// Result type alias using our Error. `Ok` is the only success indicator.
pub type Result<T = (), C = i32> = std::result::Result<T, Error<C>>;
