use crate::{error::RegionError, source::ByteSource};

/// A bounded, non-owning view of `len` bytes at `offset` inside a [`ByteSource`].
///
/// Construction checks `offset + len <= capacity`, so a region in hand is
/// always in bounds for the lifetime of the borrow.
#[derive(Debug)]
pub struct ByteRegion<'a, S: ?Sized> {
    source: &'a S,
    offset: usize,
    len: usize,
}

impl<'a, S: ByteSource + ?Sized> ByteRegion<'a, S> {
    pub fn new(source: &'a S, offset: usize, len: usize) -> Result<Self, RegionError> {
        let capacity = source.capacity();
        match offset.checked_add(len) {
            Some(end) if end <= capacity => Ok(Self {
                source,
                offset,
                len,
            }),
            _ => Err(RegionError::OutOfBounds {
                offset,
                len,
                capacity,
            }),
        }
    }

    /// The bytes between the source's reader and writer indices.
    pub fn readable(source: &'a S) -> Result<Self, RegionError> {
        let reader = source.reader_index();
        let len = source.writer_index().saturating_sub(reader);
        Self::new(source, reader, len)
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-place view of the region when the source stores it contiguously.
    pub fn as_contiguous(&self) -> Option<&'a [u8]> {
        self.source.contiguous(self.offset, self.len)
    }

    /// Copy the region into the front of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than the region.
    pub fn copy_to_slice(&self, dst: &mut [u8]) {
        self.source.copy_to_slice(self.offset, &mut dst[..self.len]);
    }
}

impl<S: ?Sized> Clone for ByteRegion<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for ByteRegion<'_, S> {}
