//! Encoding tags and buffer contracts shared by the `strdecode` crates.
//!
//! This crate has no opinion on how bytes are stored. It defines the
//! [`ByteSource`] trait a buffer implements, the [`ByteRegion`] view the
//! decoder reads through, and the closed [`Charset`] set it dispatches on.

mod charset;
mod error;
mod region;
mod source;

pub use charset::Charset;
pub use error::{DecodeError, RegionError};
pub use region::ByteRegion;
pub use source::{ByteSource, StorageKind};
