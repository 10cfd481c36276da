//! Self-test runner
//!
//! `err_selftest -t 1` runs one test, `-t 0` (the default) runs all of them.
//! `err_selftest --fatal-depth N` escalates an unhandled chain of N frames.

use clap::Parser;
use errchain::{fatal, ErrorLog};
use errchain_demos::selftest;
use log::info;
use std::io;

#[derive(Parser)]
#[command(name = "err_selftest")]
#[command(about = "Self-test of the errchain propagation discipline")]
struct Cli {
    /// Specify which test to run (0 runs all)
    #[arg(short = 't', long = "test", default_value_t = 0)]
    testnum: u32,

    /// Escalate an unhandled chain of this many frames instead of testing
    #[arg(long)]
    fatal_depth: Option<usize>,
}

fn main() {
    ErrorLog::init();
    let cli = Cli::parse();
    let mut stderr = io::stderr();

    if let Some(depth) = cli.fatal_depth {
        info!("Escalating a chain of depth {depth}");
        fatal::escalate(selftest::chain_of_depth(depth), &mut stderr);
        return;
    }

    if cli.testnum == 0 || cli.testnum == 1 {
        fatal::escalate(selftest::test1(), &mut stderr);
        println!("test1: success");
    }

    if cli.testnum == 0 || cli.testnum == 2 {
        fatal::escalate(selftest::test2(), &mut stderr);
        println!("test2: success");
    }
}
