//! Decode a region of a byte buffer into a [`String`] under a chosen [`Charset`].
//!
//! The decoder reads straight out of the buffer whenever the buffer can lend a
//! contiguous slice (heap arrays at any offset, off-heap mappings). Buffers
//! that cannot, such as [`buffer::CompositeBuffer`] across a chunk boundary,
//! are copied once into a per-thread scratch array first. Both paths produce
//! identical text.
//!
//! ```
//! use strdecode::{Charset, buffer::HeapBuffer, decode_string};
//!
//! let buffer = HeapBuffer::wrap(vec![b'a'; 66], 1, 64).unwrap();
//! let text = decode_string(&buffer, 0, 64, Charset::Iso8859_1).unwrap();
//! assert_eq!(text, "a".repeat(64));
//! ```

mod decoder;
mod error;
mod scratch;
mod single_byte;
mod utf16;

pub use decoder::{
    DEFAULT_SCRATCH_LIMIT, StringDecoder, StringDecoderBuilder, decode_slice, decode_string,
};
pub use error::StrDecodeError;
pub use strdecode_buffer as buffer;
pub use strdecode_core as core;
pub use strdecode_core::{ByteRegion, ByteSource, Charset, DecodeError, RegionError, StorageKind};
