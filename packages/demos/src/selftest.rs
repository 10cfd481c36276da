//! Self-test of the propagation discipline
//!
//! Every check is itself a guard clause, so a failing check comes back as an error chain that
//! `err_selftest` escalates.

use errchain::{bail, ensure, format_message, propagate, rethrow, Error, Location, Result};

/// Code used by the self-test's own checks
pub const CHECK_FAILED: i32 = 99;

const BIG_MESSAGE_LEN: usize = 65536 * 1024;

fn funct_c(_c: i32) -> Result {
    bail!(1, "funct_c always throws 1");
}

fn funct_b(b: i32) -> Result {
    match b {
        0 => Ok(()),
        1 => bail!(1, "b is {}", b),
        2 => {
            let big_mesg = "x".repeat(BIG_MESSAGE_LEN);
            Err(Error::throw(Location::caller(), 2, big_mesg))
        }
        3 => match funct_c(3) {
            Ok(()) => Ok(()),
            Err(e) => rethrow!(e, 3),
        },
        _ => bail!(CHECK_FAILED, "should not get here"),
    }
}

/// Success, formatted messages, a 64 MiB message and rethrow
///
/// # Errors
///
/// A chain coded [`CHECK_FAILED`] naming the first check that did not hold.
pub fn test1() -> Result {
    let start_msg = format_message(format_args!("{}: {}\n", "err_selftest", "starting"));
    ensure!(
        matches!(start_msg.as_deref(), Ok("err_selftest: starting\n")),
        CHECK_FAILED
    );

    // success
    propagate!(funct_b(0));

    // printf-style message
    let Err(err) = funct_b(1) else {
        bail!(CHECK_FAILED, "funct_b(1) did not throw");
    };
    ensure!(*err.code() == 1, CHECK_FAILED);
    ensure!(err.message() == "b is 1", CHECK_FAILED);
    ensure!(err.cause().is_none(), CHECK_FAILED);
    err.dispose();

    // big message
    let Err(err) = funct_b(2) else {
        bail!(CHECK_FAILED, "funct_b(2) did not throw");
    };
    ensure!(*err.code() == 2, CHECK_FAILED);
    ensure!(err.message().len() == BIG_MESSAGE_LEN, CHECK_FAILED);
    ensure!(err.message().bytes().all(|b| b == b'x'), CHECK_FAILED);
    ensure!(err.cause().is_none(), CHECK_FAILED);
    err.dispose();

    // rethrow
    let Err(err) = funct_b(3) else {
        bail!(CHECK_FAILED, "funct_b(3) did not throw");
    };
    ensure!(*err.code() == 3, CHECK_FAILED);
    ensure!(err.depth() == 2, CHECK_FAILED);
    ensure!(
        err.cause().map(Error::message) == Some("funct_c always throws 1"),
        CHECK_FAILED
    );
    err.dispose();

    Ok(())
}

fn guarded(x: i32) -> Result<i32> {
    ensure!(x == 0, 7);
    Ok(x)
}

/// Guard clauses and implicit propagation
///
/// # Errors
///
/// A chain coded [`CHECK_FAILED`] naming the first check that did not hold.
pub fn test2() -> Result {
    propagate!(guarded(0));

    let Err(err) = guarded(1) else {
        bail!(CHECK_FAILED, "guarded(1) did not throw");
    };
    ensure!(*err.code() == 7, CHECK_FAILED);
    ensure!(err.message().contains("x == 0"), CHECK_FAILED);
    err.dispose();

    let Err(err) = chain_of_depth(4) else {
        bail!(CHECK_FAILED, "chain_of_depth(4) did not throw");
    };
    ensure!(err.depth() == 4, CHECK_FAILED);
    ensure!(err.root_cause().message() == "bottom of the chain", CHECK_FAILED);
    err.dispose();

    Ok(())
}

/// Fail through `depth` nested calls, each adding one frame
///
/// # Errors
///
/// Always; the returned chain has exactly `depth` frames (at least one).
pub fn chain_of_depth(depth: usize) -> Result {
    if depth <= 1 {
        bail!(1, "bottom of the chain");
    }
    propagate!(chain_of_depth(depth - 1));
    Ok(())
}
