// src/block_cipher/mod.rs

//! Uniform one-shot CBC transform over an in-memory buffer.
//!
//! Each supported cipher is a [`BlockCipherBackend`]; [`run`] only decides
//! which one to call. Adding a cipher means adding a back-end and a
//! [`backend_for`] arm; the encrypt/decrypt orchestration never changes.
//!
//! Every back-end validates alignment, key and IV before the first block is
//! written, and the chaining loop itself cannot fail, so on error the buffer
//! is exactly as the caller left it.

#[cfg(feature = "aes")]
mod aes_cbc;
pub(crate) mod context;
#[cfg(feature = "des")]
mod des_cbc;

#[cfg(feature = "aes")]
pub use aes_cbc::{aes_cbc_decrypt_with_key, aes_cbc_encrypt_with_key};
#[cfg(feature = "des")]
pub use des_cbc::{
    des3_cbc_decrypt_with_key, des3_cbc_encrypt_with_key, des_cbc_decrypt_with_key,
    des_cbc_encrypt_with_key,
};

use crate::error::PemcryptError;
use crate::metadata::CipherType;
use context::check_alignment;
use std::fmt;
use tracing::{debug, trace};

/// Which way the CBC transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        })
    }
}

/// One CBC cipher back-end.
///
/// `run` builds a fresh context from `key`/`iv`, chains over `buffer` in
/// place, and drops the context (wiping it) before returning, on success
/// and on failure alike.
pub trait BlockCipherBackend: Send + Sync {
    /// Header name of the cipher family.
    fn name(&self) -> &'static str;

    /// Chaining unit in bytes.
    fn block_size(&self) -> usize;

    /// Transform `buffer` in place.
    fn run(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), PemcryptError>;
}

/// Back-end for `cipher`, if this build carries one.
///
/// # Errors
///
/// [`PemcryptError::NotAvailable`] for `None`, unknown identifiers, and
/// ciphers disabled at build time.
pub fn backend_for(cipher: CipherType) -> Result<&'static dyn BlockCipherBackend, PemcryptError> {
    match cipher {
        #[cfg(feature = "aes")]
        CipherType::AesCbc => Ok(&aes_cbc::AesCbc),
        #[cfg(feature = "des")]
        CipherType::DesCbc => Ok(&des_cbc::DesCbc),
        #[cfg(feature = "des")]
        CipherType::Des3Cbc => Ok(&des_cbc::Des3Cbc),
        other => {
            debug!(cipher = %other, "no back-end for cipher");
            Err(PemcryptError::NotAvailable(format!(
                "{other} is not compiled in or not supported"
            )))
        }
    }
}

/// Run `cipher` over `buffer` in place.
///
/// # Errors
///
/// - [`PemcryptError::NotAvailable`] if no back-end matches `cipher`
/// - [`PemcryptError::Alignment`] unless `buffer.len()` is a non-zero multiple
///   of the block size
/// - [`PemcryptError::InvalidArgument`] for a key or IV the cipher cannot use
pub fn run(
    cipher: CipherType,
    direction: Direction,
    key: &[u8],
    iv: &[u8],
    buffer: &mut [u8],
) -> Result<(), PemcryptError> {
    let backend = backend_for(cipher)?;
    check_alignment(buffer.len(), backend.block_size()).inspect_err(|_| {
        debug!(
            cipher = backend.name(),
            len = buffer.len(),
            "buffer not block-aligned"
        );
    })?;

    trace!(
        cipher = backend.name(),
        %direction,
        key_size = key.len(),
        len = buffer.len(),
        "running CBC transform"
    );
    backend.run(direction, key, iv, buffer)
}
