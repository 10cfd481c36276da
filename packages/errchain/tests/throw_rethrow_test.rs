//! Throw, rethrow and guard behavior of error chains

use errchain::{
    bail, ensure, err, here, propagate, rethrow, Error, Location, Result, OUT_OF_MEMORY_MESSAGE,
};
use proptest::prelude::*;

fn funct_c(_c: i32) -> Result {
    bail!(1, "funct_c always throws 1");
}

fn funct_b(b: i32) -> Result {
    if b == 0 {
        return Ok(());
    }
    if b == 1 {
        bail!(1, "b is {}", b);
    }
    if b == 3 {
        if let Err(e) = funct_c(3) {
            rethrow!(e, 3);
        }
    }
    Ok(())
}

fn funct_a(a: i32) -> Result<i32> {
    propagate!(funct_b(a));
    Ok(a)
}

fn guarded(x: i32) -> Result<i32> {
    ensure!(x == 0, 7);
    Ok(x)
}

#[test]
fn test_success_is_ok() {
    assert!(funct_b(0).is_ok());
    assert_eq!(funct_a(0).ok(), Some(0));
}

#[test]
fn test_formatted_throw() {
    let err = funct_b(1).expect_err("b == 1 should throw");
    assert_eq!(*err.code(), 1);
    assert_eq!(err.message(), "b is 1");
    assert!(err.cause().is_none());
    assert_eq!(err.depth(), 1);
    assert_eq!(err.function(), Some("funct_b"));
    assert!(err.file().ends_with("throw_rethrow_test.rs"));
    err.dispose();
}

#[test]
fn test_rethrow_with_new_code() {
    let err = funct_b(3).expect_err("b == 3 should rethrow");
    assert_eq!(*err.code(), 3);
    assert_eq!(err.message(), "Re-throwing e");
    assert_eq!(err.function(), Some("funct_b"));

    let cause = err.cause().expect("rethrow should keep its cause");
    assert_eq!(*cause.code(), 1);
    assert_eq!(cause.message(), "funct_c always throws 1");
    assert_eq!(cause.function(), Some("funct_c"));
    assert!(cause.cause().is_none());
    err.dispose();
}

#[test]
fn test_rethrow_scenario() {
    let original = Error::throw(Location::caller(), 1, "fail");
    let result = original.rethrow(Location::caller(), 2, "wrap");

    assert_eq!(*result.code(), 2);
    assert_eq!(result.message(), "wrap");
    let cause = result.cause().expect("cause should be present");
    assert_eq!(*cause.code(), 1);
    assert_eq!(cause.message(), "fail");
    assert!(cause.cause().is_none());
}

#[test]
fn test_propagate_keeps_code_and_names_call() {
    let err = funct_a(1).expect_err("funct_a(1) should fail");
    assert_eq!(err.depth(), 2);
    assert_eq!(*err.code(), 1);
    assert_eq!(err.message(), "funct_b(a)");
    assert_eq!(err.function(), Some("funct_a"));
    assert_eq!(err.root_cause().message(), "b is 1");
}

#[test]
fn test_ensure_uses_condition_text() {
    let err = guarded(5).expect_err("x != 0 should fail the guard");
    assert_eq!(*err.code(), 7);
    assert!(err.message().contains("x == 0"));
    assert_eq!(err.function(), Some("guarded"));
    assert_eq!(guarded(0).ok(), Some(0));
}

#[test]
fn test_ensure_with_custom_message() {
    fn positive(x: i32) -> Result<i32> {
        ensure!(x > 0, 4, "{} is not positive", x);
        Ok(x)
    }

    let err = positive(-2).expect_err("negative input should fail");
    assert_eq!(*err.code(), 4);
    assert_eq!(err.message(), "-2 is not positive");
}

#[test]
fn test_assert_or_throw() {
    let passed: Result<(), i32> = Error::assert_or_throw(here!(), true, "x == 0", 7);
    assert!(passed.is_ok());

    let failed: Result<(), i32> = Error::assert_or_throw(here!(), false, "x == 0", 7);
    let err = failed.expect_err("false condition should throw");
    assert_eq!(*err.code(), 7);
    assert_eq!(err.message(), "x == 0");
    assert!(err.cause().is_none());
}

#[test]
fn test_err_macro_moves_owned_message() {
    let message = String::from("owned message");
    let ptr = message.as_ptr();
    let err: Error = err!(9, message);
    assert_eq!(err.message(), "owned message");
    assert_eq!(err.message().as_ptr(), ptr);
}

#[test]
fn test_caller_text_matching_fallback_is_not_degraded() {
    let err: Error = err!(1, "out of memory constructing error");
    assert_eq!(err.message(), OUT_OF_MEMORY_MESSAGE);
    assert!(!err.is_degraded());

    let err: Error = Error::throw(Location::caller(), 1, OUT_OF_MEMORY_MESSAGE.to_string());
    assert!(!err.is_degraded());
}

#[test]
fn test_inline_format_capture() {
    let b = 42;
    let err: Error = err!(1, "b is {b}");
    assert_eq!(err.message(), "b is 42");
}

#[test]
fn test_here_captures_enclosing_function() {
    let location = here!();
    assert_eq!(location.function(), Some("test_here_captures_enclosing_function"));
    assert_eq!(location.line(), line!() - 2);

    let from_closure = (|| here!())();
    assert_eq!(
        from_closure.function(),
        Some("test_here_captures_enclosing_function")
    );
}

#[test]
fn test_into_cause_peels_head() {
    let err = Error::throw(Location::caller(), 1, "root")
        .rethrow(Location::caller(), 2, "middle")
        .rethrow(Location::caller(), 3, "head");

    let middle = err.into_cause().expect("head should wrap a frame");
    assert_eq!(middle.message(), "middle");
    assert_eq!(middle.depth(), 2);
    let root = middle.into_cause().expect("middle should wrap a frame");
    assert_eq!(root.message(), "root");
    assert!(root.into_cause().is_none());
}

#[test]
fn test_deep_chain_drops_without_overflow() {
    let mut err = Error::throw(Location::caller(), 0u32, "root");
    for i in 1..200_000u32 {
        err = err.rethrow(Location::caller(), i, "frame");
    }
    assert_eq!(err.depth(), 200_000);
    err.dispose();
}

#[test]
fn test_enum_codes() {
    #[derive(Debug, Clone, PartialEq)]
    enum MathCode {
        Param,
        Internal,
    }

    fn check(input: f64) -> Result<f64, MathCode> {
        ensure!(input != 0.0, MathCode::Param);
        if input == 1.0 {
            bail!(MathCode::Internal, "input_value == 1");
        }
        Ok(1.0 / input)
    }

    assert_eq!(*check(0.0).expect_err("zero").code(), MathCode::Param);
    assert_eq!(*check(1.0).expect_err("one").code(), MathCode::Internal);
    assert_eq!(check(4.0).ok(), Some(0.25));
}

#[cfg(feature = "full-backtrace")]
#[test]
fn test_backtrace_only_on_original_throw() {
    let err = Error::throw(Location::caller(), 1, "root").rethrow(Location::caller(), 2, "head");
    assert!(err.backtrace().is_none());
    assert!(err.root_cause().backtrace().is_some());
}

proptest! {
    #[test]
    fn prop_throw_keeps_fields(code in any::<i64>(), message in ".*") {
        let err = Error::throw(Location::caller(), code, message.clone());
        prop_assert_eq!(*err.code(), code);
        prop_assert_eq!(err.message(), message.as_str());
        prop_assert!(err.cause().is_none());
    }

    #[test]
    fn prop_rethrow_wraps_unchanged(
        first in any::<i32>(),
        second in any::<i32>(),
        inner in ".*",
        outer in ".*",
    ) {
        let original = Error::throw(Location::caller(), first, inner.clone());
        let wrapped = original.rethrow(Location::caller(), second, outer.clone());
        prop_assert_eq!(*wrapped.code(), second);
        prop_assert_eq!(wrapped.message(), outer.as_str());
        let cause = wrapped.cause().expect("cause should be present");
        prop_assert_eq!(*cause.code(), first);
        prop_assert_eq!(cause.message(), inner.as_str());
        prop_assert!(cause.cause().is_none());
    }

    #[test]
    fn prop_chain_length_after_rethrows(k in 0usize..64) {
        let mut err = Error::throw(Location::caller(), 0usize, "root");
        for i in 0..k {
            err = err.rethrow(Location::caller(), i + 1, "again");
        }
        prop_assert_eq!(err.depth(), k + 1);
        prop_assert_eq!(err.chain().count(), k + 1);
        prop_assert_eq!(*err.root_cause().code(), 0);
    }
}
