//! Reciprocal calculator
//!
//! Reads numbers (from the command line, or stdin when none are given) and prints their
//! reciprocals. Zero is reported and skipped; one is an unhandled error that ends the program
//! with a stack trace on stderr.

use clap::Parser;
use errchain::{abort_on_err, ErrorLog};
use errchain_demos::math::math_example;
use std::io::{self, Cursor};

#[derive(Parser)]
#[command(name = "reciprocal")]
#[command(about = "Print reciprocals of floating point numbers")]
struct Cli {
    /// Numbers to process instead of reading stdin
    #[arg(allow_negative_numbers = true)]
    inputs: Vec<String>,
}

fn main() {
    ErrorLog::init();
    let cli = Cli::parse();

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    // If an error returns to the outermost main, abort.
    if cli.inputs.is_empty() {
        abort_on_err!(math_example(io::stdin().lock(), &mut stdout), stderr);
    } else {
        let input = Cursor::new(cli.inputs.join("\n"));
        abort_on_err!(math_example(input, &mut stdout), stderr);
    }
}
