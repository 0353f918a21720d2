use bytes::Bytes;
use strdecode_core::{ByteSource, StorageKind};

use crate::{
    error::BufferError,
    range::{checked_end, expect_end},
};

/// Read-only view of a shared heap array, starting at `array_offset`.
///
/// Wrapping never copies: the buffer keeps a handle on the whole array and
/// translates buffer offsets by `array_offset`. Cloning shares the array.
#[derive(Debug, Clone)]
pub struct HeapBuffer {
    array: Bytes,
    array_offset: usize,
    capacity: usize,
    reader_index: usize,
}

impl HeapBuffer {
    /// Wrap `len` bytes of `array` starting at `offset`. The result is fully readable.
    pub fn wrap(array: impl Into<Bytes>, offset: usize, len: usize) -> Result<Self, BufferError> {
        let array = array.into();
        let array_len = array.len();
        match offset.checked_add(len) {
            Some(end) if end <= array_len => Ok(Self {
                array,
                array_offset: offset,
                capacity: len,
                reader_index: 0,
            }),
            _ => Err(BufferError::ArrayRange {
                offset,
                len,
                array_len,
            }),
        }
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        let capacity = data.len();
        Self {
            array: Bytes::from(data),
            array_offset: 0,
            capacity,
            reader_index: 0,
        }
    }

    /// The whole backing array, including bytes outside this buffer.
    pub fn array(&self) -> &[u8] {
        &self.array
    }

    pub fn array_offset(&self) -> usize {
        self.array_offset
    }

    pub fn set_reader_index(&mut self, index: usize) -> Result<(), BufferError> {
        if index > self.capacity {
            return Err(BufferError::IndexOutOfBounds {
                index,
                writer_index: self.capacity,
            });
        }
        self.reader_index = index;
        Ok(())
    }

    /// Give up this handle on the array.
    pub fn release(self) {
        tracing::debug!(
            capacity = self.capacity,
            array_offset = self.array_offset,
            "released heap buffer"
        );
    }
}

impl ByteSource for HeapBuffer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Heap
    }

    fn reader_index(&self) -> usize {
        self.reader_index
    }

    fn contiguous(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = checked_end(offset, len, self.capacity)?;
        self.array
            .get(self.array_offset + offset..self.array_offset + end)
    }

    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]) {
        let end = expect_end(offset, dst.len(), self.capacity);
        dst.copy_from_slice(&self.array[self.array_offset + offset..self.array_offset + end]);
    }
}
