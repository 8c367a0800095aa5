//! Insertion operation: place an entry, or grow and re-place everything.

use tracing::debug;

use crate::node::{Buckets, Entry, Link};
use crate::ops::locate::{Located, locate};

/// Outcome of placing one entry into a bucket array.
pub enum Placed<V> {
    /// The entry was linked into a chain.
    Inserted,
    /// An entry with the same hash exists; the rejected entry is handed back.
    Exists(Box<Entry<V>>),
    /// No room without growing; the entry is handed back.
    LinksFull(Box<Entry<V>>),
}

/// Places `entry` at the slot found by [`locate`].
pub fn place<V>(buckets: &mut Buckets<V>, entry: Box<Entry<V>>, ceiling: usize) -> Placed<V> {
    let start = buckets.home(entry.hash);
    match locate(buckets, start, entry.hash, ceiling) {
        Located::AlreadyExists => Placed::Exists(entry),
        Located::LinksFull => Placed::LinksFull(entry),
        Located::EmptySlot(bucket) => match buckets.head_mut(bucket) {
            Some(head) => {
                *head = Some(entry);
                Placed::Inserted
            }
            None => Placed::LinksFull(entry),
        },
        Located::Tail(bucket) => match buckets.head_mut(bucket) {
            Some(head) => {
                append_tail(head, entry);
                Placed::Inserted
            }
            None => Placed::LinksFull(entry),
        },
    }
}

fn append_tail<V>(head: &mut Link<V>, entry: Box<Entry<V>>) {
    let mut cur = head;
    while let Some(node) = cur {
        cur = &mut node.next;
    }
    *cur = Some(entry);
}

/// Replaces `buckets` with a larger array holding the same entries.
///
/// The capacity doubles; if re-placing the detached entries still runs
/// out of spill room, it doubles again and starts over. Each round strictly
/// increases capacity, so the loop is bounded by the number of doublings.
///
/// # Panics
///
/// Panics if the bucket count would overflow `usize`.
pub fn grow<V>(buckets: &mut Buckets<V>, ceiling: usize) {
    let old_capacity = buckets.capacity();
    let mut pending = buckets.take_all();
    let entries = pending.len();
    let mut capacity = old_capacity;

    loop {
        capacity = capacity
            .checked_mul(2)
            .expect("bucket array capacity overflow");
        let mut next = Buckets::with_capacity(capacity);
        match relink_all(&mut next, pending, ceiling) {
            Ok(()) => {
                *buckets = next;
                break;
            }
            Err(back) => pending = back,
        }
    }

    debug!(old_capacity, new_capacity = capacity, entries, "hash table grown");
}

/// Places every entry of `entries` into `buckets`.
///
/// On `LinksFull` all entries, placed or not, are handed back in storage
/// order so the caller can retry with a larger array.
fn relink_all<V>(
    buckets: &mut Buckets<V>,
    entries: Vec<Box<Entry<V>>>,
    ceiling: usize,
) -> Result<(), Vec<Box<Entry<V>>>> {
    let mut entries = entries.into_iter();
    while let Some(entry) = entries.next() {
        match place(buckets, entry, ceiling) {
            Placed::Inserted => {}
            Placed::LinksFull(entry) => {
                let mut back = buckets.take_all();
                back.push(entry);
                back.extend(entries);
                return Err(back);
            }
            Placed::Exists(_) => unreachable!("duplicate hash among stored entries"),
        }
    }
    Ok(())
}
