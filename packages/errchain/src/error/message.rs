//! Message formatting with fallible allocation
//!
//! A failure while describing a failure must stay observable, so message buffers are reserved
//! with `try_reserve_exact` and a static text stands in when the reservation is refused.

use super::logging::ErrorLog;
use std::borrow::Cow;
use std::fmt::{self, Write};
use thiserror::Error;

/// Message stored in place of one that could not be allocated
pub const OUT_OF_MEMORY_MESSAGE: &str = "out of memory constructing error";

/// Message stored in place of one whose arguments failed to format
pub const FORMAT_FAILED_MESSAGE: &str = "formatting failed constructing error";

/// Why a message could not be produced
#[derive(Debug, Error)]
pub enum MessageError {
    /// The allocator refused the message buffer
    #[error("message allocation of {requested} bytes failed")]
    Alloc {
        /// Bytes needed for the formatted message
        requested: usize,
    },

    /// A `Display` implementation returned an error
    #[error("message formatting failed")]
    Format,
}

impl MessageError {
    /// Static text stored in the frame instead of the lost message
    #[must_use]
    pub fn degraded_text(&self) -> &'static str {
        match self {
            Self::Alloc { .. } => OUT_OF_MEMORY_MESSAGE,
            Self::Format => FORMAT_FAILED_MESSAGE,
        }
    }
}

/// Counts formatted bytes without storing them
struct Measure(usize);

impl Write for Measure {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 = self.0.saturating_add(s.len());
        Ok(())
    }
}

/// Format `args` into a freshly allocated buffer of exactly the needed size.
///
/// # Errors
///
/// Returns [`MessageError::Alloc`] if the buffer cannot be reserved and
/// [`MessageError::Format`] if an argument fails to format.
pub fn format_message(args: fmt::Arguments<'_>) -> Result<String, MessageError> {
    let mut measure = Measure(0);
    measure.write_fmt(args).map_err(|_| MessageError::Format)?;

    let mut buf = String::new();
    buf.try_reserve_exact(measure.0)
        .map_err(|_| MessageError::Alloc {
            requested: measure.0,
        })?;
    buf.write_fmt(args).map_err(|_| MessageError::Format)?;
    Ok(buf)
}

/// Text of one frame
///
/// Borrowed `'static` text and moved-in `String`s are stored without copying. A message built
/// by [`Message::from_args`] that had to fall back to a static stand-in remembers that, so a
/// caller's own text is never mistaken for the stand-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: Cow<'static, str>,
    degraded: bool,
}

impl Message {
    /// Message for `args`, degraded to a static text if it cannot be built.
    ///
    /// Format strings without arguments are kept as borrowed `'static` text.
    #[must_use]
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        if let Some(text) = args.as_str() {
            return Self::from(text);
        }
        match format_message(args) {
            Ok(text) => Self::from(text),
            Err(e) => {
                ErrorLog::log_degraded_message(&e);
                Self {
                    text: Cow::Borrowed(e.degraded_text()),
                    degraded: true,
                }
            }
        }
    }

    /// The message text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the text is a stand-in for a message that could not be built
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Whether the text owns a heap buffer
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::from(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::from(Cow::<'static, str>::Owned(text))
    }
}

impl From<Cow<'static, str>> for Message {
    fn from(text: Cow<'static, str>) -> Self {
        Self {
            text,
            degraded: false,
        }
    }
}

impl PartialEq<str> for Message {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Message {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
