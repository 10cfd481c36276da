//! Macros for error creation and propagation with automatic file/line/function capture

/// Create a new chain at the call site
///
/// `err!(code, "format {}", args)` formats a message; `err!(code, expr)` takes any
/// `Into<Message>` (a literal, or an owned `String` moved in without copying).
#[macro_export]
macro_rules! err {
    ($code:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::Error::throw(
            $crate::here!(),
            $code,
            $crate::Message::from_args(::core::format_args!($fmt $(, $arg)*)),
        )
    };
    ($code:expr, $msg:expr $(,)?) => {
        $crate::Error::throw($crate::here!(), $code, $msg)
    };
}

/// Macro for bailing out with a new chain
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::core::result::Result::Err($crate::err!($($arg)*))
    };
}

/// Macro for ensuring a condition holds
///
/// Without a message the condition's source text becomes the message.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $code:expr $(,)?) => {
        if let ::core::result::Result::Err(e) = $crate::Error::assert_or_throw(
            $crate::here!(),
            $cond,
            ::core::stringify!($cond),
            $code,
        ) {
            return ::core::result::Result::Err(e);
        }
    };
    ($cond:expr, $code:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($code, $($arg)+);
        }
    };
}

/// Return an existing chain extended by a frame for the call site
///
/// `rethrow!(e)` keeps the chain's code; `rethrow!(e, code)` replaces it; a trailing message
/// replaces the default `"Re-throwing <e>"`.
#[macro_export]
macro_rules! rethrow {
    ($err:expr $(,)?) => {{
        let err = $err;
        let code = ::core::clone::Clone::clone(err.code());
        return ::core::result::Result::Err(err.rethrow(
            $crate::here!(),
            code,
            ::core::concat!("Re-throwing ", ::core::stringify!($err)),
        ));
    }};
    ($err:expr, $code:expr $(,)?) => {
        return ::core::result::Result::Err($err.rethrow(
            $crate::here!(),
            $code,
            ::core::concat!("Re-throwing ", ::core::stringify!($err)),
        ))
    };
    ($err:expr, $code:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        return ::core::result::Result::Err($err.rethrow(
            $crate::here!(),
            $code,
            $crate::Message::from_args(::core::format_args!($fmt $(, $arg)*)),
        ))
    };
}

/// Evaluate a fallible call, rethrowing any error at this call site
///
/// The new frame keeps the failing chain's code and names the call as its message.
#[macro_export]
macro_rules! propagate {
    ($call:expr $(,)?) => {
        match $call {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(err) => {
                let code = ::core::clone::Clone::clone(err.code());
                return ::core::result::Result::Err(err.rethrow(
                    $crate::here!(),
                    code,
                    ::core::stringify!($call),
                ));
            }
        }
    };
}

/// Evaluate a fallible call at an unrecoverable boundary
///
/// On error the call site is added as a frame, the chain is printed to `$sink`, and the
/// process terminates. See [`fatal::escalate_at`](crate::fatal::escalate_at).
#[macro_export]
macro_rules! abort_on_err {
    ($call:expr, $sink:expr $(,)?) => {
        $crate::fatal::escalate_at(
            $crate::here!(),
            ::core::stringify!($call),
            $call,
            &mut $sink,
        )
    };
}
