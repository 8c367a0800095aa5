use crate::hash::{FNV1A_OFFSET_BASIS, hash_bytes, hash_str};

#[test]
fn empty_input_hashes_to_zero() {
    assert_eq!(hash_bytes(b""), 0);
    assert_eq!(hash_str(""), 0);
}

#[test]
fn reference_vectors() {
    assert_eq!(hash_str("a"), 0xE40C_292C);
    assert_eq!(hash_str("b"), 0xE70C_2DE5);
    assert_eq!(hash_str("foobar"), 0xBF9C_F968);
}

#[test]
fn single_zero_byte_is_not_offset_basis() {
    // 0 XOR leaves the state unchanged, the multiply still runs.
    assert_eq!(hash_bytes(&[0]), FNV1A_OFFSET_BASIS.wrapping_mul(0x0100_0193));
}

#[test]
fn high_bytes_are_unsigned() {
    assert_eq!(
        hash_bytes(&[0xFF]),
        (FNV1A_OFFSET_BASIS ^ 0xFF).wrapping_mul(0x0100_0193)
    );
}

#[test]
fn known_collisions() {
    assert_eq!(hash_str("costarring"), hash_str("liquid"));
    assert_eq!(hash_str("declinate"), hash_str("macallums"));
}
