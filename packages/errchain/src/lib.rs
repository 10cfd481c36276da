//! Explicit error propagation with rethrow stack traces
//!
//! Every fallible function returns [`Result`]: `Ok` is the only "no error" value, and an
//! [`Error`] is an owned record of one failure frame (location, code, message) that links to
//! the frame it wraps. Callers either:
//! - handle the error and [`Error::dispose`] it,
//! - extend it with [`Error::rethrow`] (or [`propagate!`]) and return it upward, or
//! - hand it to [`fatal::escalate`] at a designated top-level boundary.
//!
//! ```
//! use errchain::{bail, propagate, Result};
//!
//! fn leaf(b: i32) -> Result<i32> {
//!     if b == 1 {
//!         bail!(1, "b is {}", b);
//!     }
//!     Ok(b * 2)
//! }
//!
//! fn middle(b: i32) -> Result<i32> {
//!     let doubled = propagate!(leaf(b));
//!     Ok(doubled + 1)
//! }
//!
//! let err = middle(1).unwrap_err();
//! assert_eq!(err.depth(), 2);
//! assert_eq!(err.cause().map(|c| c.message()), Some("b is 1"));
//! err.dispose();
//! ```

pub mod config;
pub mod error;
pub mod fatal;

pub use config::{Config, ConfigError, PrintOptions};
pub use error::*;
