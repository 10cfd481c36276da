//! Error constructors and methods

use super::logging::ErrorLog;
use super::message::Message;
use super::types::{Code, Error, Location};
#[cfg(feature = "full-backtrace")]
use crate::config::Config;

impl<C: Code> Error<C> {
    /// Start a new chain of length one.
    ///
    /// The caller owns the returned value and must dispose it, rethrow it, or escalate it.
    ///
    /// With the `full-backtrace` feature this also walks the stack, unless
    /// `ERRCHAIN_BACKTRACE=false` turns capture off for throws that are usually handled.
    #[must_use]
    pub fn throw(location: Location, code: C, message: impl Into<Message>) -> Self {
        let err = Self {
            code,
            location,
            message: message.into(),
            cause: None,
            #[cfg(feature = "full-backtrace")]
            backtrace: Config::global()
                .capture_backtrace
                .then(backtrace::Backtrace::new_unresolved),
        };
        ErrorLog::log_throw(&err);
        err
    }

    /// Wrap this chain in a new head frame.
    ///
    /// `self` moves into the new frame's cause, so the chain grows by exactly one frame and
    /// the old head is reachable only through the returned value.
    #[must_use]
    pub fn rethrow(self, location: Location, code: C, message: impl Into<Message>) -> Self {
        let err = Self {
            code,
            location,
            message: message.into(),
            cause: Some(Box::new(self)),
            #[cfg(feature = "full-backtrace")]
            backtrace: None,
        };
        ErrorLog::log_rethrow(&err);
        err
    }

    /// Guard clause: `Ok(())` when `condition` holds, otherwise a throw whose message is
    /// the condition's source text.
    ///
    /// # Errors
    ///
    /// Returns a new chain with `code` when `condition` is false.
    pub fn assert_or_throw(
        location: Location,
        condition: bool,
        condition_text: &'static str,
        code: C,
    ) -> super::types::Result<(), C> {
        if condition {
            Ok(())
        } else {
            Err(Self::throw(location, code, condition_text))
        }
    }

    /// Release this chain after handling it.
    ///
    /// Equivalent to dropping the value; consuming `self` makes a second dispose impossible.
    pub fn dispose(self) {
        ErrorLog::log_dispose(&self);
    }

    /// Application-defined failure category
    #[must_use]
    pub fn code(&self) -> &C {
        &self.code
    }

    /// Where this frame was created
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Source file of this frame
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.location.file
    }

    /// Source line of this frame
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line
    }

    /// Function that created this frame, if captured
    #[must_use]
    pub fn function(&self) -> Option<&'static str> {
        self.location.function
    }

    /// Human-readable description of this frame
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Whether the message is a static stand-in for one that could not be built
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.message.is_degraded()
    }

    /// The frame this one wraps
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// The original throw at the tail of the chain
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        self.chain().last().unwrap_or(self)
    }

    /// Frames from this one (newest) to the original throw (oldest)
    #[must_use]
    pub fn chain(&self) -> Chain<'_, C> {
        Chain { next: Some(self) }
    }

    /// Number of frames in the chain
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Discard the head frame, taking ownership of the one it wrapped
    #[must_use]
    pub fn into_cause(mut self) -> Option<Self> {
        self.cause.take().map(|cause| *cause)
    }

    /// Native backtrace recorded by the original throw
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> Option<&backtrace::Backtrace> {
        self.backtrace.as_ref()
    }
}

impl<C> Drop for Error<C> {
    fn drop(&mut self) {
        // Unlink frame by frame so deep chains do not recurse.
        let mut next = self.cause.take();
        while let Some(mut frame) = next {
            next = frame.cause.take();
        }
    }
}

/// Iterator over the frames of a chain, newest first
#[derive(Debug, Clone)]
pub struct Chain<'a, C> {
    next: Option<&'a Error<C>>,
}

impl<'a, C> Iterator for Chain<'a, C> {
    type Item = &'a Error<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause.as_deref();
        Some(current)
    }
}

impl<C> std::iter::FusedIterator for Chain<'_, C> {}
