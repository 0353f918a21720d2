//! Error types for buffer construction and index manipulation.

/// Errors produced by the buffers in this crate.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// The off-heap mapping could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A wrapped array range does not fit the array.
    #[error("array range [{offset}, {offset}+{len}) exceeds array length {array_len}")]
    ArrayRange {
        offset: usize,
        len: usize,
        array_len: usize,
    },

    /// A write would run past the fixed capacity.
    #[error("write of {requested} bytes exceeds {writable} writable bytes")]
    CapacityExceeded { requested: usize, writable: usize },

    /// A reader index was placed beyond the writer index.
    #[error("reader index {index} is beyond writer index {writer_index}")]
    IndexOutOfBounds { index: usize, writer_index: usize },
}
