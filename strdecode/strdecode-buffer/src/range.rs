//! Range checks shared by the `ByteSource` impls.

/// End of `[offset, offset + len)` if it fits in `capacity`.
pub(crate) fn checked_end(offset: usize, len: usize, capacity: usize) -> Option<usize> {
    offset.checked_add(len).filter(|&end| end <= capacity)
}

/// Like [`checked_end`], but panics when the range does not fit.
#[track_caller]
pub(crate) fn expect_end(offset: usize, len: usize, capacity: usize) -> usize {
    match checked_end(offset, len, capacity) {
        Some(end) => end,
        None => panic!("range [{offset}, {offset}+{len}) out of bounds for capacity {capacity}"),
    }
}
