//! Insertion-point search with forward spill.

use tracing::trace;

use crate::node::{Buckets, LOAD_FACTOR_DEN, LOAD_FACTOR_NUM};

/// Where a new entry for a given hash can go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located {
    /// The bucket has no chain; the entry becomes its head.
    EmptySlot(usize),
    /// The bucket's chain is below the ceiling; append at its tail.
    Tail(usize),
    /// An entry with the same hash was seen during the scan.
    AlreadyExists,
    /// Spill capacity is exhausted; the table must grow.
    LinksFull,
}

/// Scans buckets from `start` towards the end of the array (no wraparound)
/// looking for room for an entry with `hash`.
///
/// Every visited chain is checked for an equal hash. A full chain sends
/// the scan to the next bucket unless the entries scanned so far reach
/// 0.75 of `ceiling × capacity`.
pub fn locate<V>(buckets: &Buckets<V>, start: usize, hash: u32, ceiling: usize) -> Located {
    let capacity = buckets.capacity();
    let pseudo_size = ceiling.saturating_mul(capacity);
    let mut scanned = 0_usize;

    for bucket in start..capacity {
        let mut chain = buckets.chain(bucket).peekable();
        if chain.peek().is_none() {
            return Located::EmptySlot(bucket);
        }

        let mut chain_len = 0_usize;
        for entry in chain {
            if entry.hash == hash {
                return Located::AlreadyExists;
            }
            chain_len += 1;
        }
        scanned += chain_len;

        if chain_len < ceiling {
            return Located::Tail(bucket);
        }
        if scanned.saturating_mul(LOAD_FACTOR_DEN) >= pseudo_size.saturating_mul(LOAD_FACTOR_NUM) {
            break;
        }
        trace!(bucket, hash, "chain full, spilling forward");
    }

    Located::LinksFull
}
