//! Chain entries, the bucket array and table constants.

use std::fmt;
use std::iter;

/// Default maximum number of entries per chain before insertion spills
/// into the following bucket.
pub const DEFAULT_CHAIN_CEILING: usize = 4;

/// Default number of buckets in a fresh table.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Load factor at which the table grows, as `NUM / DEN` (0.75).
pub const LOAD_FACTOR_NUM: usize = 3;

/// Denominator of the growth load factor.
pub const LOAD_FACTOR_DEN: usize = 4;

/// Owning link to the next entry of a chain.
pub(crate) type Link<V> = Option<Box<Entry<V>>>;

/// One entry of a bucket chain.
pub struct Entry<V> {
    /// Hash the entry was stored under. Unique within a table.
    pub hash: u32,
    /// The payload.
    pub value: V,
    pub(crate) next: Link<V>,
}

impl<V> Entry<V> {
    pub(crate) fn boxed(hash: u32, value: V) -> Box<Self> {
        Box::new(Self {
            hash,
            value,
            next: None,
        })
    }

    /// Returns the entry following this one in its chain.
    #[must_use]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }
}

impl<V: fmt::Debug> fmt::Debug for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("hash", &format_args!("{:#010x}", self.hash))
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Bucket array
// ---------------------------------------------------------------------------

/// Power-of-two array of chain heads.
pub(crate) struct Buckets<V> {
    heads: Vec<Link<V>>,
}

impl<V> Buckets<V> {
    /// Creates `capacity` empty buckets. `capacity` must be a power of two.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            heads: iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.heads.len()
    }

    /// Home bucket of `hash`: `hash mod capacity`.
    pub(crate) fn home(&self, hash: u32) -> usize {
        hash as usize % self.capacity()
    }

    pub(crate) fn heads(&self) -> &[Link<V>] {
        &self.heads
    }

    pub(crate) fn head_mut(&mut self, bucket: usize) -> Option<&mut Link<V>> {
        self.heads.get_mut(bucket)
    }

    /// Walks the chain stored in `bucket`.
    pub(crate) fn chain(&self, bucket: usize) -> Chain<'_, V> {
        Chain {
            cur: self.heads.get(bucket).and_then(Option::as_deref),
        }
    }

    /// Returns the entry at `position` of the chain in `bucket`.
    pub(crate) fn entry_mut(&mut self, bucket: usize, position: usize) -> Option<&mut Entry<V>> {
        let mut cur = self.heads.get_mut(bucket)?.as_deref_mut()?;
        for _ in 0..position {
            cur = cur.next.as_deref_mut()?;
        }
        Some(cur)
    }

    /// Detaches every entry, in storage order, leaving all buckets empty.
    ///
    /// The returned entries are unlinked (`next` is `None`).
    pub(crate) fn take_all(&mut self) -> Vec<Box<Entry<V>>> {
        let mut out = Vec::new();
        for head in &mut self.heads {
            let mut cur = head.take();
            while let Some(mut entry) = cur {
                cur = entry.next.take();
                out.push(entry);
            }
        }
        out
    }
}

impl<V> Drop for Buckets<V> {
    fn drop(&mut self) {
        // Unlink iteratively; the default drop of a long chain recurses.
        for head in &mut self.heads {
            let mut cur = head.take();
            while let Some(mut entry) = cur {
                cur = entry.next.take();
            }
        }
    }
}

/// Iterator over the entries of one chain, head first.
pub(crate) struct Chain<'a, V> {
    cur: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cur?;
        self.cur = entry.next.as_deref();
        Some(entry)
    }
}
