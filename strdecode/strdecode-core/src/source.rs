//! Contract a byte buffer fulfils so regions of it can be decoded.

use std::fmt;

/// Where a buffer keeps its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Heap allocation, possibly addressed at a non-zero array offset (`heap`)
    Heap,
    /// Off-heap anonymous mapping (`direct`)
    Direct,
    /// Several heap chunks without a single contiguous view (`composite`)
    Composite,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heap => "heap",
            Self::Direct => "direct",
            Self::Composite => "composite",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only access to a buffer's storage.
///
/// Offsets are relative to the start of the buffer, not to its reader index.
/// Callers go through [`ByteRegion`](crate::ByteRegion), which checks bounds
/// before any of the accessors below are reached.
pub trait ByteSource {
    /// Total number of addressable bytes.
    fn capacity(&self) -> usize;

    fn storage_kind(&self) -> StorageKind;

    /// Start of the readable bytes. Decoding never moves it.
    fn reader_index(&self) -> usize {
        0
    }

    /// End of the readable bytes.
    fn writer_index(&self) -> usize {
        self.capacity()
    }

    /// Borrow `len` bytes at `offset` in place, if they are stored contiguously.
    ///
    /// Returns `None` when `offset + len` overflows or exceeds [`capacity`](Self::capacity).
    fn contiguous(&self, offset: usize, len: usize) -> Option<&[u8]>;

    /// Copy `dst.len()` bytes starting at `offset` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + dst.len()` overflows or exceeds [`capacity`](Self::capacity).
    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]);
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn storage_kind(&self) -> StorageKind {
        (**self).storage_kind()
    }

    fn reader_index(&self) -> usize {
        (**self).reader_index()
    }

    fn writer_index(&self) -> usize {
        (**self).writer_index()
    }

    fn contiguous(&self, offset: usize, len: usize) -> Option<&[u8]> {
        (**self).contiguous(offset, len)
    }

    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]) {
        (**self).copy_to_slice(offset, dst)
    }
}
