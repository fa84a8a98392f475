//! src/decryptor/decrypt.rs
//! Decrypt a key-container body in place under a password.

use crate::aliases::Password;
use crate::block_cipher::Direction;
use crate::codec::transform_buffer;
use crate::crypto::kdf::legacy::HashType;
use crate::error::PemcryptError;
use crate::metadata::EncryptionMetadata;

/// Decrypt `buffer` in place, deriving the key with MD5 as legacy readers do.
///
/// The hex salt from the header is decoded into `metadata` first, then used
/// both as KDF salt and CBC IV. Padding is not stripped.
///
/// A wrong password is not detected here: CBC without a MAC decrypts to
/// garbage. Callers check the plaintext structure (e.g. its DER header).
///
/// # Errors
///
/// As [`encrypt_buffer`](crate::encrypt_buffer), except that a zero IV size
/// is not rejected up front.
#[inline]
pub fn decrypt_buffer(
    metadata: &mut EncryptionMetadata,
    buffer: &mut [u8],
    password: &Password,
) -> Result<(), PemcryptError> {
    decrypt_buffer_with_hash(metadata, buffer, password, HashType::default())
}

/// [`decrypt_buffer`] with an explicit KDF hash.
pub fn decrypt_buffer_with_hash(
    metadata: &mut EncryptionMetadata,
    buffer: &mut [u8],
    password: &Password,
    hash: HashType,
) -> Result<(), PemcryptError> {
    transform_buffer(Direction::Decrypt, metadata, buffer, password, hash)
}
