//! Messages far larger than common buffer sizes survive the whole lifecycle intact

use errchain::{format_message, rethrow, Error, Location, Result};

const BIG: usize = 65536 * 1024;

fn throws_big() -> Result {
    let big_mesg = "x".repeat(BIG);
    Err(Error::throw(Location::caller(), 2, big_mesg))
}

fn rethrows_big() -> Result {
    if let Err(e) = throws_big() {
        rethrow!(e);
    }
    Ok(())
}

#[test]
fn test_big_message_throw() {
    let err = throws_big().expect_err("should throw");
    assert_eq!(*err.code(), 2);
    assert_eq!(err.message().len(), BIG);
    assert!(err.message().bytes().all(|b| b == b'x'));
    assert!(err.cause().is_none());
    err.dispose();
}

#[test]
fn test_big_message_through_rethrow_and_print() {
    let err = rethrows_big().expect_err("should rethrow");
    assert_eq!(err.depth(), 2);
    assert_eq!(*err.code(), 2);
    assert_eq!(err.message(), "Re-throwing e");
    assert_eq!(err.root_cause().message().len(), BIG);

    let mut sink = Vec::new();
    err.print(&mut sink).expect("writing to a Vec should not fail");
    let text = String::from_utf8(sink).expect("trace should be valid UTF-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains(" code=2: "));
    let message = lines[1]
        .split_once(" code=2: ")
        .map(|(_, message)| message)
        .expect("frame line should carry the code");
    assert_eq!(message.len(), BIG);
    err.dispose();
}

#[test]
fn test_big_formatted_message() {
    let chunk = "y".repeat(BIG / 2);
    let text = format_message(format_args!("{chunk}{chunk}"))
        .expect("formatting should succeed");
    assert_eq!(text.len(), BIG);
    assert_eq!(text.capacity(), BIG);
}
