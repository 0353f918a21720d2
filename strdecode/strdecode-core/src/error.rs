//! Error types for region construction and decoding.

use crate::charset::Charset;

/// Error returned when bytes cannot be turned into text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The requested charset name does not resolve to a supported [`Charset`].
    #[error("unsupported encoding '{name}'")]
    UnsupportedEncoding { name: String },

    /// The bytes violate a structural rule of the charset
    /// (e.g., an odd byte count for UTF-16).
    #[error("malformed {charset} input at byte {position}: {detail}")]
    MalformedInput {
        charset: Charset,
        position: usize,
        detail: &'static str,
    },
}

/// Error returned when a [`ByteRegion`](crate::ByteRegion) does not fit its source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    #[error("region [{offset}, {offset}+{len}) exceeds capacity {capacity}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },
}
