//! Bucket-chained hash table keyed by precomputed 32-bit hashes.

use std::fmt;

use tracing::trace;

use crate::InsertResult;
use crate::config::TableConfig;
use crate::error::Result;
use crate::iter::Iter;
use crate::node::{Buckets, DEFAULT_CHAIN_CEILING, DEFAULT_INITIAL_CAPACITY, Entry};
use crate::ops::find::{Found, find};
use crate::ops::insert::{Placed, grow, place};
use crate::ops::remove::unlink;

/// Hash table with per-bucket chains and forward spill.
///
/// Entries are keyed by their 32-bit hash alone: two payloads with the
/// same hash cannot coexist, and the second insertion is rejected.
/// A chain holds at most [`chain_ceiling`](Self::chain_ceiling) entries;
/// further insertions spill into the following buckets. When the entries
/// scanned during a spill reach 0.75 of `ceiling × capacity`, or the scan
/// runs off the end of the bucket array, the table doubles its capacity
/// and rehashes.
///
/// Capacity is always a power of two and never shrinks.
pub struct HashTable<V> {
    buckets: Buckets<V>,
    ceiling: usize,
    len: usize,
    /// Set by `remove`: a freed slot may sit in front of a spilled entry.
    holes: bool,
}

// ---------------------------------------------------------------------------
// Construction & accessors
// ---------------------------------------------------------------------------

impl<V> HashTable<V> {
    /// Creates an empty table with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_INITIAL_CAPACITY, DEFAULT_CHAIN_CEILING)
    }

    /// Creates an empty table from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// bucket count or the chain ceiling is zero.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        let (capacity, ceiling) = config.resolve()?;
        Ok(Self::from_parts(capacity, ceiling))
    }

    fn from_parts(capacity: usize, ceiling: usize) -> Self {
        Self {
            buckets: Buckets::with_capacity(capacity),
            ceiling,
            len: 0,
            holes: false,
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets. Always a power of two.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    /// Returns the maximum chain length per bucket.
    #[must_use]
    pub const fn chain_ceiling(&self) -> usize {
        self.ceiling
    }

    /// Returns an iterator over `(hash, &value)` in bucket storage order.
    ///
    /// The order is deterministic for a given capacity and insertion
    /// history, but carries no other meaning.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.buckets.heads(), self.len)
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

impl<V> HashTable<V> {
    /// Finds the entry stored under `hash`, with its chain position.
    #[must_use]
    pub fn find(&self, hash: u32) -> Option<Found<'_, V>> {
        find(&self.buckets, hash)
    }

    /// Returns a reference to the value stored under `hash`.
    #[must_use]
    pub fn get(&self, hash: u32) -> Option<&V> {
        self.find(hash).map(|found| &found.entry.value)
    }

    /// Returns a mutable reference to the value stored under `hash`.
    #[must_use]
    pub fn get_mut(&mut self, hash: u32) -> Option<&mut V> {
        let (bucket, position) = {
            let found = self.find(hash)?;
            (found.bucket, found.position)
        };
        self.buckets
            .entry_mut(bucket, position)
            .map(|entry| &mut entry.value)
    }

    /// Returns `true` if an entry is stored under `hash`.
    #[must_use]
    pub fn contains(&self, hash: u32) -> bool {
        self.find(hash).is_some()
    }
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

impl<V> HashTable<V> {
    /// Stores `value` under `hash`.
    ///
    /// Returns [`InsertResult::Exists`] with the rejected value if an entry
    /// with the same hash is already present; the table is left unchanged.
    /// May grow the table, which invalidates every position previously
    /// returned by [`find`](Self::find).
    ///
    /// Growth depends on where a spill scan stops, not on how many entries
    /// are stored: hashes that share their low bits pile into the last
    /// buckets, and each spill past the end doubles the table. Five hashes
    /// agreeing in their low 20 bits already force 2^21 buckets.
    ///
    /// # Panics
    ///
    /// Panics if growing would overflow the bucket count. Clustered low
    /// bits can also demand a bucket array too large to allocate, which
    /// aborts the process.
    pub fn put(&mut self, hash: u32, value: V) -> InsertResult<V> {
        if self.holes && self.contains(hash) {
            trace!(hash, "insert rejected, hash already present");
            return InsertResult::Exists(value);
        }

        let mut entry = Entry::boxed(hash, value);
        loop {
            match place(&mut self.buckets, entry, self.ceiling) {
                Placed::Inserted => {
                    self.len += 1;
                    return InsertResult::Inserted;
                }
                Placed::Exists(rejected) => {
                    trace!(hash, "insert rejected, hash already present");
                    return InsertResult::Exists(rejected.value);
                }
                Placed::LinksFull(back) => {
                    entry = back;
                    grow(&mut self.buckets, self.ceiling);
                    self.holes = false;
                }
            }
        }
    }

    /// Removes the entry stored under `hash`, returning its value.
    ///
    /// Capacity is unchanged.
    pub fn remove(&mut self, hash: u32) -> Option<V> {
        let (bucket, position) = {
            let found = self.find(hash)?;
            (found.bucket, found.position)
        };
        let removed = unlink(&mut self.buckets, bucket, position)?;
        self.len -= 1;
        self.holes = true;
        Some(removed.value)
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        drop(self.buckets.take_all());
        self.len = 0;
        self.holes = false;
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("chain_ceiling", &self.ceiling)
            .finish_non_exhaustive()
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (u32, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
