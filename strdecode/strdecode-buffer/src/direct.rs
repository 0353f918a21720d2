use memmap2::MmapMut;
use strdecode_core::{ByteSource, StorageKind};

use crate::{
    error::BufferError,
    range::{checked_end, expect_end},
};

/// Fixed-capacity buffer backed by an anonymous memory mapping.
///
/// The mapping lives outside the Rust heap and is unmapped on drop. A zero
/// capacity buffer holds no mapping at all.
#[derive(Debug)]
pub struct DirectBuffer {
    map: Option<MmapMut>,
    capacity: usize,
    reader_index: usize,
    writer_index: usize,
}

impl DirectBuffer {
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let map = if capacity == 0 {
            None
        } else {
            Some(MmapMut::map_anon(capacity)?)
        };
        tracing::debug!(capacity, "allocated direct buffer");
        Ok(Self {
            map,
            capacity,
            reader_index: 0,
            writer_index: 0,
        })
    }

    /// Allocate a buffer sized to `data` and write all of it.
    pub fn copy_from_slice(data: &[u8]) -> Result<Self, BufferError> {
        let mut buffer = Self::with_capacity(data.len())?;
        buffer.write_bytes(data)?;
        Ok(buffer)
    }

    /// Append `src` at the writer index.
    pub fn write_bytes(&mut self, src: &[u8]) -> Result<(), BufferError> {
        let writable = self.writable_bytes();
        if src.len() > writable {
            return Err(BufferError::CapacityExceeded {
                requested: src.len(),
                writable,
            });
        }
        if let Some(map) = self.map.as_mut() {
            let start = self.writer_index;
            map[start..start + src.len()].copy_from_slice(src);
        }
        self.writer_index += src.len();
        Ok(())
    }

    pub fn writable_bytes(&self) -> usize {
        self.capacity - self.writer_index
    }

    pub fn set_reader_index(&mut self, index: usize) -> Result<(), BufferError> {
        if index > self.writer_index {
            return Err(BufferError::IndexOutOfBounds {
                index,
                writer_index: self.writer_index,
            });
        }
        self.reader_index = index;
        Ok(())
    }

    /// Unmap the storage.
    pub fn release(self) {
        tracing::debug!(capacity = self.capacity, "released direct buffer");
    }

    fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }
}

impl ByteSource for DirectBuffer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Direct
    }

    fn reader_index(&self) -> usize {
        self.reader_index
    }

    fn writer_index(&self) -> usize {
        self.writer_index
    }

    fn contiguous(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = checked_end(offset, len, self.capacity)?;
        self.bytes().get(offset..end)
    }

    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]) {
        let end = expect_end(offset, dst.len(), self.capacity);
        dst.copy_from_slice(&self.bytes()[offset..end]);
    }
}
