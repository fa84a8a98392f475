//! src/block_cipher/des_cbc.rs
//! DES-CBC and three-key 3DES (EDE) CBC back-ends.

use super::context::{cbc_decrypt, cbc_encrypt};
use super::{BlockCipherBackend, Direction};
use crate::consts::DES_BLOCK_SIZE;
use crate::error::PemcryptError;
use des::{Des, TdesEde3};

pub(crate) struct DesCbc;

pub(crate) struct Des3Cbc;

impl BlockCipherBackend for DesCbc {
    fn name(&self) -> &'static str {
        "DES-CBC"
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn run(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), PemcryptError> {
        match direction {
            Direction::Encrypt => des_cbc_encrypt_with_key(buffer, key, iv),
            Direction::Decrypt => des_cbc_decrypt_with_key(buffer, key, iv),
        }
    }
}

impl BlockCipherBackend for Des3Cbc {
    fn name(&self) -> &'static str {
        "DES-EDE3-CBC"
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn run(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), PemcryptError> {
        match direction {
            Direction::Encrypt => des3_cbc_encrypt_with_key(buffer, key, iv),
            Direction::Decrypt => des3_cbc_decrypt_with_key(buffer, key, iv),
        }
    }
}

/// DES-CBC encrypt `buffer` in place with a raw 8-byte key and 8-byte IV.
///
/// # Errors
///
/// - [`PemcryptError::Alignment`] unless `buffer.len()` is a non-zero multiple of 8
/// - [`PemcryptError::InvalidArgument`] for a key that is not 8 bytes or a short IV
pub fn des_cbc_encrypt_with_key(
    buffer: &mut [u8],
    key: &[u8],
    iv: &[u8],
) -> Result<(), PemcryptError> {
    cbc_encrypt::<Des>(key, iv, buffer)
}

/// DES-CBC decrypt `buffer` in place. Errors as [`des_cbc_encrypt_with_key`].
pub fn des_cbc_decrypt_with_key(
    buffer: &mut [u8],
    key: &[u8],
    iv: &[u8],
) -> Result<(), PemcryptError> {
    cbc_decrypt::<Des>(key, iv, buffer)
}

/// 3DES-CBC encrypt `buffer` in place with a raw 24-byte key and 8-byte IV.
///
/// # Errors
///
/// - [`PemcryptError::Alignment`] unless `buffer.len()` is a non-zero multiple of 8
/// - [`PemcryptError::InvalidArgument`] for a key that is not 24 bytes or a short IV
pub fn des3_cbc_encrypt_with_key(
    buffer: &mut [u8],
    key: &[u8],
    iv: &[u8],
) -> Result<(), PemcryptError> {
    cbc_encrypt::<TdesEde3>(key, iv, buffer)
}

/// 3DES-CBC decrypt `buffer` in place. Errors as [`des3_cbc_encrypt_with_key`].
pub fn des3_cbc_decrypt_with_key(
    buffer: &mut [u8],
    key: &[u8],
    iv: &[u8],
) -> Result<(), PemcryptError> {
    cbc_decrypt::<TdesEde3>(key, iv, buffer)
}
