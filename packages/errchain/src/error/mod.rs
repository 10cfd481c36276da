//! Error values and their propagation discipline
//!
//! Provides:
//! - Single-owner error frames chained through their `cause`
//! - Throw, rethrow and assert-or-throw constructors
//! - Chain printing, display and serde export
//! - Call-site macros that capture file, line and function

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod location;
pub mod logging;
pub mod macros;
pub mod message;
pub mod serialize;
pub mod types;

pub use constructors::Chain;
pub use extensions::{OptionExt, ResultExt};
pub use logging::ErrorLog;
pub use message::{
    format_message, Message, MessageError, FORMAT_FAILED_MESSAGE, OUT_OF_MEMORY_MESSAGE,
};
pub use types::{Code, Error, Location, Result};
