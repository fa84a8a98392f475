//! # Constants
//!
//! Sizes fixed by the legacy encrypted-key header format and the supported ciphers.

/// Largest key any supported cipher takes (AES-256).
pub const MAX_KEY_SIZE: usize = 32;

/// Largest binary IV/salt the header can carry (one AES block).
pub const MAX_IV_SIZE: usize = 16;

/// Capacity of the header IV field, which holds hex text before decoding.
pub const IV_HEX_CAPACITY: usize = MAX_IV_SIZE * 2;

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// DES and 3DES block size in bytes.
pub const DES_BLOCK_SIZE: usize = 8;

/// Single-DES key size in bytes (parity bits included).
pub const DES_KEY_SIZE: usize = 8;

/// Three-key 3DES (EDE) key size in bytes.
pub const DES3_KEY_SIZE: usize = 24;

/// Valid AES key sizes: AES-128, AES-192, AES-256.
pub const AES_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Iteration count of the legacy KDF. Part of the on-disk format; never tune it.
pub const LEGACY_KDF_ITERATIONS: u32 = 1;
