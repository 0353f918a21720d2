//! Per-thread scratch array for regions without an in-place view.

use std::cell::RefCell;

use strdecode_core::{ByteRegion, ByteSource};

thread_local! {
    static SCRATCH: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// Copy `region` out of its source and hand the copy to `f`.
///
/// Regions up to `limit` bytes reuse this thread's scratch array; larger ones
/// (or a re-entrant call while the scratch is borrowed) get a fresh array.
pub(crate) fn with_region_copy<S, R>(
    region: ByteRegion<'_, S>,
    limit: usize,
    mut f: impl FnMut(&[u8]) -> R,
) -> R
where
    S: ByteSource + ?Sized,
{
    let len = region.len();
    if len <= limit {
        let reused = SCRATCH.try_with(|cell| {
            let mut scratch = cell.try_borrow_mut().ok()?;
            if scratch.len() < len {
                scratch.resize(len, 0);
            }
            let buf = &mut scratch[..len];
            region.copy_to_slice(buf);
            tracing::trace!(len, "copied region into thread-local scratch");
            Some(f(buf))
        });
        if let Ok(Some(out)) = reused {
            return out;
        }
    }

    let mut owned = vec![0; len];
    region.copy_to_slice(&mut owned);
    tracing::trace!(len, limit, "copied region into fresh array");
    f(&owned)
}
