use std::error::Error;
use std::fmt;

/// Failure of a single decode pass.
///
/// `UnexpectedEof` is structural: the stream ended before a required field
/// could be read. `UnknownCode` is semantic: a field was read successfully
/// but its value lies outside the recognized set. Either aborts the decode
/// immediately; a misaligned stream cannot be resumed, so there is no
/// recovery and no partial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    UnexpectedEof {
        offset: usize,
    },
    UnknownCode {
        field: &'static str,
        value: u32,
        offset: usize,
    },
}

impl DecodeError {
    /// Byte offset at which the failing read began.
    pub fn offset(&self) -> usize {
        match *self {
            Self::UnexpectedEof { offset } => offset,
            Self::UnknownCode { offset, .. } => offset,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnexpectedEof { offset } => {
                write!(f, "unexpected end of stream at offset {offset}")
            }
            Self::UnknownCode {
                field,
                value,
                offset,
            } => {
                write!(f, "unknown {field} value {value:#04x} at offset {offset}")
            }
        }
    }
}

impl Error for DecodeError {}
