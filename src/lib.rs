//! Bucket-chained hash table and a JSON-like value tree built on it.
//!
//! [`HashTable`] stores payloads under precomputed 32-bit hashes. Each
//! bucket holds a singly linked chain of bounded length; a full chain
//! spills the insertion into the following bucket, and the table doubles
//! once spilling has scanned 75% of its chain capacity.
//!
//! [`Value`] is a tagged tree (null, boolean, number, string, array,
//! object) whose object variant is backed by a [`HashTable`] keyed by the
//! FNV-1a hash of each key. [`serialize`] flattens a tree into a
//! caller-supplied buffer without ever writing past its end.
//!
//! # Key properties
//!
//! - **No duplicate hashes**: a second payload with an equal hash is
//!   rejected and handed back to the caller
//! - **Monotonic capacity**: always a power of two, never shrinks
//! - **Exact buffer accounting**: serialization either fits or fails with
//!   [`SerializeError::NoMemory`]
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! ```
//! use chain_json::{Value, serialize};
//!
//! let mut doc = Value::object();
//! let object = doc.as_object_mut().unwrap();
//! let _ = object.put("a", Value::number(1.0));
//!
//! let mut buf = [0_u8; 32];
//! let n = serialize(&doc, &mut buf).unwrap();
//! assert_eq!(&buf[..n], br#"{"a": 1}"#);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod hash;
pub mod iter;
pub mod node;
pub mod number;
pub mod object;
pub mod serialize;
pub mod table;
pub mod value;

mod ops;

#[cfg(test)]
mod tests;

pub use config::TableConfig;
pub use error::{Error, Result, SerializeError};
pub use object::Object;
pub use ops::find::Found;
pub use serialize::{serialize, serialized_len, to_bytes};
pub use table::HashTable;
pub use value::{Array, Value};

/// Outcome of inserting into a [`HashTable`] or an [`Object`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult<V> {
    /// The payload was stored.
    Inserted,
    /// An entry with the same hash (or key) already exists. The table is
    /// unchanged and the rejected payload is handed back.
    Exists(V),
}

impl<V> InsertResult<V> {
    /// Returns `true` if the payload was stored.
    #[must_use]
    pub const fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }

    /// Returns the rejected payload, if any.
    #[must_use]
    pub fn rejected(self) -> Option<V> {
        match self {
            Self::Inserted => None,
            Self::Exists(value) => Some(value),
        }
    }
}
