//! src/batch_ops.rs
//! Parallel encrypt/decrypt of independent buffers (feature `batch-ops`).
//!
//! Each item carries its own metadata, so no state is shared between
//! workers; the password is only read.

use crate::aliases::Password;
use crate::crypto::kdf::legacy::HashType;
use crate::error::PemcryptError;
use crate::metadata::EncryptionMetadata;
use crate::{decrypt_buffer_with_hash, encrypt_buffer_with_hash};
use rayon::prelude::*;

/// Encrypt every `(metadata, buffer)` pair in parallel.
///
/// Stops at the first error; buffers of other items may or may not have
/// been encrypted by then, each one either fully or not at all.
pub fn encrypt_batch<B>(
    batch: &mut [(EncryptionMetadata, B)],
    password: &Password,
    hash: HashType,
) -> Result<(), PemcryptError>
where
    B: AsMut<[u8]> + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(meta, buf)| encrypt_buffer_with_hash(meta, buf.as_mut(), password, hash))
}

/// Decrypt every `(metadata, buffer)` pair in parallel. Same error rules as
/// [`encrypt_batch`].
pub fn decrypt_batch<B>(
    batch: &mut [(EncryptionMetadata, B)],
    password: &Password,
    hash: HashType,
) -> Result<(), PemcryptError>
where
    B: AsMut<[u8]> + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(meta, buf)| decrypt_buffer_with_hash(meta, buf.as_mut(), password, hash))
}
