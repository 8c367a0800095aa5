//! Lookup operation: forward scan from the home bucket.

use crate::node::{Buckets, Entry};

/// Position of an entry found by [`HashTable::find`](crate::HashTable::find).
#[derive(Debug)]
pub struct Found<'a, V> {
    /// The matching entry.
    pub entry: &'a Entry<V>,
    /// The entry before it in the same chain, if any.
    pub previous: Option<&'a Entry<V>>,
    /// Bucket holding the chain.
    pub bucket: usize,
    /// Zero-based position within the chain.
    pub position: usize,
}

impl<V> Clone for Found<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Found<'_, V> {}

/// Searches for `hash` starting at its home bucket and scanning forward to
/// the end of the bucket array.
///
/// Insertion only ever spills forward and never wraps, so this covers
/// every bucket an entry for `hash` can live in.
pub fn find<V>(buckets: &Buckets<V>, hash: u32) -> Option<Found<'_, V>> {
    for bucket in buckets.home(hash)..buckets.capacity() {
        let mut previous = None;
        for (position, entry) in buckets.chain(bucket).enumerate() {
            if entry.hash == hash {
                return Some(Found {
                    entry,
                    previous,
                    bucket,
                    position,
                });
            }
            previous = Some(entry);
        }
    }
    None
}
