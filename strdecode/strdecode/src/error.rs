//! Error type for the one-call [`decode_string`](crate::decode_string) entry point.

use strdecode_core::{DecodeError, RegionError};

/// Errors produced by [`decode_string`](crate::decode_string).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrDecodeError {
    /// The requested range does not fit the buffer.
    #[error(transparent)]
    Region(#[from] RegionError),

    /// The bytes could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
