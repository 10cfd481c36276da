//! Display, chain printing and trait implementations for Error

use super::types::{Code, Error};
use crate::config::PrintOptions;
use std::fmt;
use std::io;

/// One rendered frame: `<file>:<line> [<function>] code=<code>: <message>`
pub(crate) struct FrameLine<'a, C> {
    pub(crate) frame: &'a Error<C>,
    pub(crate) options: &'a PrintOptions,
}

impl<C: Code> fmt::Display for FrameLine<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.frame.location();
        let file = if self.options.basename {
            location.basename()
        } else {
            location.file()
        };
        write!(f, "{file}:{}", location.line())?;
        if let Some(function) = location.function() {
            write!(f, " [{function}]")?;
        }
        write!(f, " code={:?}: ", self.frame.code())?;

        let message = self.frame.message();
        match self.options.max_message_bytes {
            Some(limit) if message.len() > limit => {
                let mut cut = limit;
                while !message.is_char_boundary(cut) {
                    cut -= 1;
                }
                write_single_line(f, &message[..cut])?;
                write!(f, " ... [{} more bytes]", message.len() - cut)
            }
            _ => write_single_line(f, message),
        }
    }
}

/// Write `text` with line breaks escaped so a frame stays on one line.
fn write_single_line(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let mut rest = text;
    while let Some(pos) = rest.find(['\n', '\r']) {
        f.write_str(&rest[..pos])?;
        f.write_str(if rest.as_bytes()[pos] == b'\n' { "\\n" } else { "\\r" })?;
        rest = &rest[pos + 1..];
    }
    f.write_str(rest)
}

impl<C: Code> Error<C> {
    /// Write the stack trace, one line per frame, newest frame first.
    ///
    /// Messages are written in full. The chain is only read.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `sink`.
    pub fn print<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        self.print_with(sink, &PrintOptions::default())
    }

    /// Write the stack trace using explicit display options
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `sink`.
    pub fn print_with<W: io::Write + ?Sized>(
        &self,
        sink: &mut W,
        options: &PrintOptions,
    ) -> io::Result<()> {
        for frame in self.chain() {
            writeln!(sink, "{}", FrameLine { frame, options })?;
        }
        Ok(())
    }
}

impl<C: Code> fmt::Display for Error<C> {
    /// `{}` renders the head frame; `{:#}` renders every frame, newest first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = PrintOptions::default();
        if f.alternate() {
            for (i, frame) in self.chain().enumerate() {
                if i > 0 {
                    f.write_str("\n")?;
                }
                write!(f, "{}", FrameLine { frame, options: &options })?;
            }
            Ok(())
        } else {
            write!(f, "{}", FrameLine { frame: self, options: &options })
        }
    }
}

impl<C: Code> std::error::Error for Error<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
