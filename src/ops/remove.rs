//! Removal operation: unlink one entry from its chain.

use crate::node::{Buckets, Entry};

/// Unlinks the entry at `position` of the chain in `bucket`, joining its
/// predecessor to its successor.
pub fn unlink<V>(buckets: &mut Buckets<V>, bucket: usize, position: usize) -> Option<Box<Entry<V>>> {
    let mut cur = buckets.head_mut(bucket)?;
    for _ in 0..position {
        cur = &mut cur.as_mut()?.next;
    }
    let mut removed = cur.take()?;
    *cur = removed.next.take();
    Some(removed)
}
