//! tests/common.rs
//! Common constants and helpers shared across test files

use pemcrypt_rs::aliases::Password;

/// Standard test password used across vectors
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"test";

/// 16-byte AES IV as it appears in a header
#[allow(dead_code)]
pub const AES_IV_HEX: &str = "000102030405060708090A0B0C0D0E0F";

/// 8-byte DES/3DES IV as it appears in a header
#[allow(dead_code)]
pub const DES_IV_HEX: &str = "0102030405060708";

/// 32 bytes 0x00..0x1f, aligned for both block sizes
#[allow(dead_code)]
pub fn counting_plaintext() -> [u8; 32] {
    core::array::from_fn(|i| i as u8)
}

#[allow(dead_code)]
pub fn password(bytes: &[u8]) -> Password {
    Password::new(bytes.to_vec())
}

#[allow(dead_code)]
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("test vector is valid hex")
}
