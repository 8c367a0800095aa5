//! Object variant of the value tree, backed by [`HashTable`].

use std::fmt;

use crate::InsertResult;
use crate::config::TableConfig;
use crate::error::Result;
use crate::hash::hash_str;
use crate::iter::Iter;
use crate::table::HashTable;
use crate::value::Value;

/// Map from owned string keys to owned values.
///
/// Each pair is stored in a [`HashTable`] under the FNV-1a hash of its key.
/// Iteration follows bucket storage order, not insertion order.
#[derive(Default)]
pub struct Object {
    table: HashTable<(String, Value)>,
}

impl Object {
    /// Creates an empty object with the default table configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    /// Creates an empty object whose table uses `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) for a
    /// zero bucket count or chain ceiling.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        Ok(Self {
            table: HashTable::with_config(config)?,
        })
    }

    /// Returns the number of pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the object has no pairs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the bucket count of the backing table.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Stores `value` under a copy of `key`.
    ///
    /// If `key` is already present the existing pair is left untouched and
    /// `value` is handed back as [`InsertResult::Exists`]. A different key
    /// whose hash collides with a stored key is rejected the same way.
    pub fn put(&mut self, key: &str, value: Value) -> InsertResult<Value> {
        let hash = hash_str(key);
        if self.table.contains(hash) {
            return InsertResult::Exists(value);
        }
        match self.table.put(hash, (key.to_owned(), value)) {
            InsertResult::Inserted => InsertResult::Inserted,
            InsertResult::Exists((_, value)) => InsertResult::Exists(value),
        }
    }

    /// Returns the value under `key` without transferring ownership.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let (stored, value) = self.table.get(hash_str(key))?;
        (stored == key).then_some(value)
    }

    /// Returns the value under `key` mutably.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let (stored, value) = self.table.get_mut(hash_str(key))?;
        (stored == key).then_some(value)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` and hands its value back.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        if !self.contains_key(key) {
            return None;
        }
        self.table.remove(hash_str(key)).map(|(_, value)| value)
    }

    /// Removes `key`, destroying its value. Returns `true` if it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Iterates over `(key, value)` pairs in bucket storage order.
    #[must_use]
    pub fn iter(&self) -> Pairs<'_> {
        Pairs {
            inner: self.table.iter(),
        }
    }
}

/// Iterator over the pairs of an [`Object`].
pub struct Pairs<'a> {
    inner: Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(_, (key, value))| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Pairs<'_> {}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Pairs<'a> {
        self.iter()
    }
}

impl PartialEq for Object {
    /// Same keys mapped to equal values, regardless of storage order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: AsRef<str>> Extend<(K, Value)> for Object {
    /// Inserts every pair; keys already present keep their first value.
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.put(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = Self::new();
        object.extend(iter);
        object
    }
}
