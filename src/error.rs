//! Error types for table configuration, value access and serialization.

use thiserror::Error;

/// Error type for table and value-tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A [`TableConfig`](crate::TableConfig) field is out of range.
    #[error("invalid table config: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// A value had a different variant than the operation requires.
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        /// Variant the operation needs.
        expected: &'static str,
        /// Variant that was actually present.
        found: &'static str,
    },
}

/// Serialization failure.
///
/// The output buffer holds unspecified bytes after any of these; callers
/// must not rely on partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// The remaining buffer capacity cannot hold the next piece of output.
    #[error("buffer too small: needed {needed} more bytes, {remaining} left")]
    NoMemory {
        /// Size of the piece that did not fit.
        needed: usize,
        /// Capacity left when the write was attempted.
        remaining: usize,
    },
    /// The value tree holds content that cannot be emitted.
    #[error("invalid value: {0}")]
    Invalid(&'static str),
}

/// Result type alias for table and value-tree operations.
pub type Result<T> = std::result::Result<T, Error>;
