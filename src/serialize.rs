//! Text encoder for value trees.
//!
//! Output grammar:
//!
//! - `null`, `true`, `false`
//! - numbers in `%g` form (see [`number`](crate::number))
//! - strings as `"` bytes `"`, written verbatim with no escaping
//! - arrays as `[a, b, c]`
//! - objects as `{"k": v, "k2": v2}` in bucket storage order
//!
//! Every piece is written through a [`Sink`], which for a caller-supplied
//! buffer checks the remaining capacity before copying anything.

use tracing::debug;

use crate::error::SerializeError;
use crate::number::format_general;
use crate::value::Value;

/// Destination for encoded bytes.
pub trait Sink {
    /// Appends `bytes` in full, or fails without writing past the end.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::NoMemory`] if `bytes` does not fit.
    fn write(&mut self, bytes: &[u8]) -> Result<(), SerializeError>;
}

/// Fixed-capacity sink over a caller buffer.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    /// Wraps `buf`; its length is the capacity.
    #[must_use]
    pub const fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.pos
    }

    /// Capacity left.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

impl Sink for SliceSink<'_> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), SerializeError> {
        let remaining = self.remaining();
        if bytes.len() > remaining {
            return Err(SerializeError::NoMemory {
                needed: bytes.len(),
                remaining,
            });
        }
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}

/// Sink that only counts bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingSink {
    /// Bytes seen so far.
    pub len: usize,
}

impl Sink for CountingSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), SerializeError> {
        self.len += bytes.len();
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), SerializeError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Serializes `value` into `buf` and returns the number of bytes written.
///
/// Never writes past `buf.len()`. On error the contents of `buf` are
/// unspecified.
///
/// # Errors
///
/// - [`SerializeError::NoMemory`] as soon as the next piece does not fit.
/// - [`SerializeError::Invalid`] for a string or key containing a NUL byte.
///
/// ```
/// use chain_json::{Value, serialize};
///
/// let value = Value::from(vec![Value::from(true), Value::null()]);
/// let mut buf = [0_u8; 16];
/// let n = serialize(&value, &mut buf).unwrap();
/// assert_eq!(&buf[..n], b"[true, null]");
/// ```
pub fn serialize(value: &Value, buf: &mut [u8]) -> Result<usize, SerializeError> {
    let capacity = buf.len();
    let mut sink = SliceSink::new(buf);
    if let Err(err) = encode(value, &mut sink) {
        debug!(capacity, written = sink.written(), %err, "serialization failed");
        return Err(err);
    }
    Ok(sink.written())
}

/// Returns the exact number of bytes [`serialize`] would write.
///
/// # Errors
///
/// Returns [`SerializeError::Invalid`] for content that cannot be emitted.
pub fn serialized_len(value: &Value) -> Result<usize, SerializeError> {
    let mut sink = CountingSink::default();
    encode(value, &mut sink)?;
    Ok(sink.len)
}

/// Serializes `value` into a new vector.
///
/// # Errors
///
/// Returns [`SerializeError::Invalid`] for content that cannot be emitted.
pub fn to_bytes(value: &Value) -> Result<Vec<u8>, SerializeError> {
    let mut out = Vec::new();
    encode(value, &mut out)?;
    Ok(out)
}

/// Writes `value` to `sink`, depth first.
///
/// # Errors
///
/// Propagates the first error from `sink` or from malformed content, at
/// any nesting depth.
pub fn encode<S: Sink + ?Sized>(value: &Value, sink: &mut S) -> Result<(), SerializeError> {
    match value {
        Value::Null => sink.write(b"null"),
        Value::Boolean(true) => sink.write(b"true"),
        Value::Boolean(false) => sink.write(b"false"),
        Value::Number(n) => sink.write(format_general(*n).as_bytes()),
        Value::String(bytes) => write_quoted(bytes, sink),
        Value::Array(array) => {
            sink.write(b"[")?;
            for (i, item) in array.iter().enumerate() {
                if i > 0 {
                    sink.write(b", ")?;
                }
                encode(item, sink)?;
            }
            sink.write(b"]")
        }
        Value::Object(object) => {
            sink.write(b"{")?;
            for (i, (key, item)) in object.iter().enumerate() {
                if i > 0 {
                    sink.write(b", ")?;
                }
                write_quoted(key.as_bytes(), sink)?;
                sink.write(b": ")?;
                encode(item, sink)?;
            }
            sink.write(b"}")
        }
    }
}

fn write_quoted<S: Sink + ?Sized>(bytes: &[u8], sink: &mut S) -> Result<(), SerializeError> {
    if bytes.contains(&0) {
        return Err(SerializeError::Invalid("string contains a NUL byte"));
    }
    sink.write(b"\"")?;
    sink.write(bytes)?;
    sink.write(b"\"")
}
