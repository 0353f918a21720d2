//! Byte buffers that can be handed to the `strdecode` decoder.
//!
//! Key components:
//! - [`HeapBuffer`] — shared heap array addressed at an array offset
//! - [`DirectBuffer`] — fixed-capacity off-heap anonymous mapping
//! - [`CompositeBuffer`] — several heap chunks with no single contiguous view
//!
//! All three implement [`strdecode_core::ByteSource`]. Buffers are released
//! by value, so a released buffer cannot be decoded.

mod composite;
mod direct;
mod error;
mod heap;
mod range;

pub use composite::CompositeBuffer;
pub use direct::DirectBuffer;
pub use error::BufferError;
pub use heap::HeapBuffer;
