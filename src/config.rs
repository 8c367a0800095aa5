//! Construction parameters for [`HashTable`](crate::HashTable).

use crate::error::{Error, Result};
use crate::node::{DEFAULT_CHAIN_CEILING, DEFAULT_INITIAL_CAPACITY};

/// Bucket count and chain ceiling used when a table is created.
///
/// ```
/// use chain_json::{HashTable, TableConfig};
///
/// let config = TableConfig::new().with_initial_capacity(100).with_chain_ceiling(2);
/// let table: HashTable<u8> = HashTable::with_config(config).unwrap();
/// assert_eq!(table.capacity(), 128);
/// assert_eq!(table.chain_ceiling(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    initial_capacity: usize,
    chain_ceiling: usize,
}

impl TableConfig {
    /// Returns the default configuration: 8 buckets, chains of at most 4.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            chain_ceiling: DEFAULT_CHAIN_CEILING,
        }
    }

    /// Sets the initial bucket count. Rounded up to a power of two.
    #[must_use]
    pub const fn with_initial_capacity(mut self, buckets: usize) -> Self {
        self.initial_capacity = buckets;
        self
    }

    /// Sets the maximum chain length before insertion spills forward.
    #[must_use]
    pub const fn with_chain_ceiling(mut self, ceiling: usize) -> Self {
        self.chain_ceiling = ceiling;
        self
    }

    /// Requested initial bucket count, as given.
    #[must_use]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Requested chain ceiling.
    #[must_use]
    pub const fn chain_ceiling(&self) -> usize {
        self.chain_ceiling
    }

    /// Checks the fields and returns `(bucket_count, chain_ceiling)` with
    /// the bucket count rounded up to a power of two.
    pub(crate) fn resolve(&self) -> Result<(usize, usize)> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidConfig {
                field: "initial_capacity",
                reason: "must be at least 1",
            });
        }
        if self.chain_ceiling == 0 {
            return Err(Error::InvalidConfig {
                field: "chain_ceiling",
                reason: "must be at least 1",
            });
        }
        let buckets = self
            .initial_capacity
            .checked_next_power_of_two()
            .ok_or(Error::InvalidConfig {
                field: "initial_capacity",
                reason: "has no representable power of two",
            })?;
        Ok((buckets, self.chain_ceiling))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
