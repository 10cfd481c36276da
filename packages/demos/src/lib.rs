//! Demo programs for errchain
//!
//! - `math` - reciprocal calculator with an application-defined code enum
//! - `selftest` - end-to-end checks of throw, rethrow, guards and large messages

pub mod math;
pub mod selftest;
