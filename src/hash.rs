//! FNV-1a hashing for table keys.
//!
//! 32-bit variant: every byte is XORed into the state, which is then
//! multiplied by the FNV prime with wrapping arithmetic.

/// FNV-1a 32-bit offset basis.
pub const FNV1A_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
pub const FNV1A_PRIME: u32 = 0x0100_0193;

/// Computes the FNV-1a hash of `bytes`.
///
/// Empty input hashes to `0`.
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> u32 {
    if bytes.is_empty() {
        return 0;
    }
    bytes.iter().fold(FNV1A_OFFSET_BASIS, |state, &byte| {
        (state ^ u32::from(byte)).wrapping_mul(FNV1A_PRIME)
    })
}

/// Computes the FNV-1a hash of the UTF-8 bytes of `key`.
#[inline]
#[must_use]
pub fn hash_str(key: &str) -> u32 {
    hash_bytes(key.as_bytes())
}
