//! Reciprocal calculator that handles some failures and escalates others

use errchain::{bail, ensure, err, propagate, rethrow, Result};
use std::io::{BufRead, Write};

/// Failure categories of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathCode {
    /// Input rejected by a sanity check
    Param,
    /// Input the calculator refuses for internal reasons
    Internal,
    /// Reading input or writing output failed
    Io,
}

/// `1 / input`, rejecting zero and one
///
/// # Errors
///
/// [`MathCode::Param`] for zero, [`MathCode::Internal`] for one.
pub fn reciprocal(input: f64) -> Result<f64, MathCode> {
    ensure!(input != 0.0, MathCode::Param);

    if input == 1.0 {
        bail!(MathCode::Internal, "input_value == 1");
    }

    Ok(1.0 / input)
}

/// Print the reciprocal of `input`, recovering from parameter errors
///
/// # Errors
///
/// Rethrows every failure other than [`MathCode::Param`].
pub fn try_one_reciprocal<W: Write>(input: f64, out: &mut W) -> Result<(), MathCode> {
    match reciprocal(input) {
        Ok(result) => write_line(out, format_args!("Reciprocal of {input} is {result}")),
        Err(err) if *err.code() == MathCode::Param => {
            err.dispose();
            write_line(out, format_args!("division by zero not allowed. Try again."))
        }
        Err(err) => rethrow!(err),
    }
}

/// Read numbers from `input` until one fails to parse, printing each reciprocal
///
/// # Errors
///
/// Propagates any failure that [`try_one_reciprocal`] does not handle.
pub fn math_example<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), MathCode> {
    propagate!(write_line(out, format_args!("Input (floating point number)?")));
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => bail!(MathCode::Io, "reading input failed: {}", e),
        };
        for token in line.split_whitespace() {
            let Ok(value) = token.parse::<f64>() else {
                return write_line(out, format_args!("No valid input found, exiting."));
            };
            propagate!(try_one_reciprocal(value, out));
            propagate!(write_line(out, format_args!("Input?")));
        }
    }
    write_line(out, format_args!("No valid input found, exiting."))
}

fn write_line<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) -> Result<(), MathCode> {
    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .map_err(|e| err!(MathCode::Io, "writing output failed: {}", e))
}
