//! src/builders/codec_builder.rs
//! Reusable encrypt/decrypt configuration.

use crate::aliases::Password;
use crate::convert::rekey_buffer;
use crate::crypto::kdf::legacy::HashType;
use crate::error::PemcryptError;
use crate::metadata::EncryptionMetadata;
use crate::{decrypt_buffer_with_hash, encrypt_buffer_with_hash};

/// Encrypt/decrypt configuration for legacy key containers.
///
/// Defaults to MD5 key derivation, the hash legacy PEM headers imply.
///
/// # Thread Safety
///
/// `Copy + Send + Sync` and holds no secrets; share one across threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferCodec {
    hash: HashType,
}

impl BufferCodec {
    /// Codec with the default (MD5) KDF hash.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `hash` for key derivation.
    #[must_use]
    pub const fn with_hash(mut self, hash: HashType) -> Self {
        self.hash = hash;
        self
    }

    /// Configured KDF hash.
    #[must_use]
    pub const fn hash(&self) -> HashType {
        self.hash
    }

    /// See [`encrypt_buffer`](crate::encrypt_buffer).
    #[inline]
    pub fn encrypt(
        &self,
        metadata: &mut EncryptionMetadata,
        buffer: &mut [u8],
        password: &Password,
    ) -> Result<(), PemcryptError> {
        encrypt_buffer_with_hash(metadata, buffer, password, self.hash)
    }

    /// See [`decrypt_buffer`](crate::decrypt_buffer).
    #[inline]
    pub fn decrypt(
        &self,
        metadata: &mut EncryptionMetadata,
        buffer: &mut [u8],
        password: &Password,
    ) -> Result<(), PemcryptError> {
        decrypt_buffer_with_hash(metadata, buffer, password, self.hash)
    }

    /// See [`rekey_buffer`].
    #[inline]
    pub fn rekey(
        &self,
        buffer: &mut [u8],
        old_metadata: &mut EncryptionMetadata,
        old_password: &Password,
        new_metadata: &mut EncryptionMetadata,
        new_password: &Password,
    ) -> Result<(), PemcryptError> {
        rekey_buffer(
            buffer,
            old_metadata,
            old_password,
            new_metadata,
            new_password,
            self.hash,
        )
    }
}
