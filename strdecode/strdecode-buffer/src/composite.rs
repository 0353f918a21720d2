use bytes::Bytes;
use strdecode_core::{ByteSource, StorageKind};

use crate::{
    error::BufferError,
    range::{checked_end, expect_end},
};

/// Logical buffer made of several heap chunks laid end to end.
///
/// Only ranges that fall inside a single chunk have an in-place view;
/// anything spanning a chunk boundary has to be copied out.
#[derive(Debug, Clone, Default)]
pub struct CompositeBuffer {
    chunks: Vec<Bytes>,
    // starts[i] is the buffer offset of chunks[i]
    starts: Vec<usize>,
    capacity: usize,
    reader_index: usize,
}

impl CompositeBuffer {
    /// Concatenate `chunks`. Empty chunks are dropped.
    pub fn new(chunks: impl IntoIterator<Item = Bytes>) -> Self {
        let mut buffer = Self::default();
        for chunk in chunks.into_iter().filter(|c| !c.is_empty()) {
            buffer.starts.push(buffer.capacity);
            buffer.capacity += chunk.len();
            buffer.chunks.push(chunk);
        }
        buffer
    }

    /// Split `data` into chunks of at most `chunk_len` bytes.
    pub fn from_slice_chunked(data: &[u8], chunk_len: usize) -> Self {
        let chunk_len = chunk_len.max(1);
        Self::new(data.chunks(chunk_len).map(Bytes::copy_from_slice))
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
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

    pub fn release(self) {
        tracing::debug!(
            capacity = self.capacity,
            chunks = self.chunks.len(),
            "released composite buffer"
        );
    }

    /// Chunk index holding `offset`, and the offset within that chunk.
    fn locate(&self, offset: usize) -> Option<(usize, usize)> {
        if offset >= self.capacity {
            return None;
        }
        let index = self.starts.partition_point(|&start| start <= offset) - 1;
        Some((index, offset - self.starts[index]))
    }
}

impl ByteSource for CompositeBuffer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Composite
    }

    fn reader_index(&self) -> usize {
        self.reader_index
    }

    fn contiguous(&self, offset: usize, len: usize) -> Option<&[u8]> {
        checked_end(offset, len, self.capacity)?;
        if len == 0 {
            return Some(&[]);
        }
        let (index, local) = self.locate(offset)?;
        self.chunks[index].get(local..local + len)
    }

    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]) {
        expect_end(offset, dst.len(), self.capacity);
        // an in-bounds, non-empty range always starts inside a chunk
        let Some((mut index, mut local)) = self.locate(offset) else {
            return;
        };
        let mut written = 0;
        while written < dst.len() {
            let chunk = &self.chunks[index];
            let n = (chunk.len() - local).min(dst.len() - written);
            dst[written..written + n].copy_from_slice(&chunk[local..local + n]);
            written += n;
            index += 1;
            local = 0;
        }
    }
}
