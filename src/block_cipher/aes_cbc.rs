//! src/block_cipher/aes_cbc.rs
//! AES-CBC back-end. Key length picks AES-128, AES-192 or AES-256.

use super::context::{cbc_decrypt, cbc_encrypt, check_alignment};
use super::{BlockCipherBackend, Direction};
use crate::consts::{AES_BLOCK_SIZE, AES_KEY_SIZES};
use crate::error::PemcryptError;
use aes::{Aes128Dec, Aes128Enc, Aes192Dec, Aes192Enc, Aes256Dec, Aes256Enc};

pub(crate) struct AesCbc;

impl BlockCipherBackend for AesCbc {
    fn name(&self) -> &'static str {
        "AES-CBC"
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn run(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), PemcryptError> {
        match direction {
            Direction::Encrypt => aes_cbc_encrypt_with_key(buffer, key, iv),
            Direction::Decrypt => aes_cbc_decrypt_with_key(buffer, key, iv),
        }
    }
}

/// AES-CBC encrypt `buffer` in place with a raw 16/24/32-byte key.
///
/// No padding is applied: `buffer.len()` must be a non-zero multiple of 16.
///
/// # Errors
///
/// - [`PemcryptError::Alignment`] if the buffer is not block-aligned
/// - [`PemcryptError::InvalidArgument`] for a bad key length or an IV shorter than 16 bytes
///
/// The buffer is untouched on any error.
pub fn aes_cbc_encrypt_with_key(
    buffer: &mut [u8],
    key: &[u8],
    iv: &[u8],
) -> Result<(), PemcryptError> {
    check_alignment(buffer.len(), AES_BLOCK_SIZE)?;
    match key.len() {
        16 => cbc_encrypt::<Aes128Enc>(key, iv, buffer),
        24 => cbc_encrypt::<Aes192Enc>(key, iv, buffer),
        32 => cbc_encrypt::<Aes256Enc>(key, iv, buffer),
        n => Err(bad_key_size(n)),
    }
}

/// AES-CBC decrypt `buffer` in place with a raw 16/24/32-byte key.
///
/// # Errors
///
/// As [`aes_cbc_encrypt_with_key`].
pub fn aes_cbc_decrypt_with_key(
    buffer: &mut [u8],
    key: &[u8],
    iv: &[u8],
) -> Result<(), PemcryptError> {
    check_alignment(buffer.len(), AES_BLOCK_SIZE)?;
    match key.len() {
        16 => cbc_decrypt::<Aes128Dec>(key, iv, buffer),
        24 => cbc_decrypt::<Aes192Dec>(key, iv, buffer),
        32 => cbc_decrypt::<Aes256Dec>(key, iv, buffer),
        n => Err(bad_key_size(n)),
    }
}

fn bad_key_size(n: usize) -> PemcryptError {
    PemcryptError::InvalidArgument(format!(
        "AES key must be one of {AES_KEY_SIZES:?} bytes, got {n}"
    ))
}
