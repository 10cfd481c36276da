//! Serde export of error chains
//!
//! A chain serializes as `{"frames": [...]}`, newest frame first, for reporting to log sinks or
//! coordinators that expect structured data.

use super::types::{Code, Error};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

#[derive(Serialize)]
struct FrameRecord<'a, C> {
    file: &'a str,
    line: u32,
    function: Option<&'a str>,
    code: &'a C,
    message: &'a str,
}

struct Frames<'a, C>(&'a Error<C>);

impl<C: Code + Serialize> Serialize for Frames<'_, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.chain().map(|frame| FrameRecord {
            file: frame.file(),
            line: frame.line(),
            function: frame.function(),
            code: frame.code(),
            message: frame.message(),
        }))
    }
}

impl<C: Code + Serialize> Serialize for Error<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Error", 1)?;
        state.serialize_field("frames", &Frames(self))?;
        state.end()
    }
}
