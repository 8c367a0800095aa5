//! Storage-order iterator for [`HashTable`](crate::HashTable).

use crate::node::{Entry, Link};

/// Iterator over `(hash, &value)` pairs, bucket by bucket, head to tail.
pub struct Iter<'a, V> {
    heads: &'a [Link<V>],
    bucket: usize,
    cur: Option<&'a Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) const fn new(heads: &'a [Link<V>], len: usize) -> Self {
        Self {
            heads,
            bucket: 0,
            cur: None,
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (u32, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.cur {
                self.cur = entry.next.as_deref();
                self.remaining -= 1;
                return Some((entry.hash, &entry.value));
            }
            let head = self.heads.get(self.bucket)?;
            self.cur = head.as_deref();
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
