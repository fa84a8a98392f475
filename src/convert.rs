//! src/convert.rs
//! Re-keying: move a container body to a new password and/or cipher.

use crate::aliases::{Password, SecretBytes};
use crate::block_cipher::Direction;
use crate::codec::transform_buffer;
use crate::crypto::kdf::legacy::HashType;
use crate::error::PemcryptError;
use crate::metadata::EncryptionMetadata;
use tracing::debug;

/// Decrypt `buffer` under the old header/password and re-encrypt it under
/// the new ones, both with `hash`.
///
/// Works on a zeroizing scratch copy, so `buffer` is only overwritten once
/// both steps have succeeded; plaintext never lands in the caller's buffer.
/// The new cipher's block size must divide the buffer length.
///
/// # Errors
///
/// Any error of [`decrypt_buffer`](crate::decrypt_buffer) or
/// [`encrypt_buffer`](crate::encrypt_buffer), plus
/// [`PemcryptError::OutOfMemory`] if the scratch copy cannot be allocated.
pub fn rekey_buffer(
    buffer: &mut [u8],
    old_metadata: &mut EncryptionMetadata,
    old_password: &Password,
    new_metadata: &mut EncryptionMetadata,
    new_password: &Password,
    hash: HashType,
) -> Result<(), PemcryptError> {
    let mut scratch = Vec::new();
    scratch.try_reserve_exact(buffer.len())?;
    scratch.extend_from_slice(buffer);
    let mut scratch = SecretBytes::new(scratch);

    transform_buffer(
        Direction::Decrypt,
        old_metadata,
        scratch.expose_secret_mut(),
        old_password,
        hash,
    )?;
    transform_buffer(
        Direction::Encrypt,
        new_metadata,
        scratch.expose_secret_mut(),
        new_password,
        hash,
    )?;

    buffer.copy_from_slice(scratch.expose_secret());
    debug!(
        from = %old_metadata.cipher_type,
        to = %new_metadata.cipher_type,
        len = buffer.len(),
        "buffer re-keyed"
    );
    Ok(())
}
