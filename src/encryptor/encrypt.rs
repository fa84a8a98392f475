//! src/encryptor/encrypt.rs
//! Encrypt a key-container body in place under a password.

use crate::aliases::Password;
use crate::block_cipher::Direction;
use crate::codec::transform_buffer;
use crate::crypto::kdf::legacy::HashType;
use crate::error::PemcryptError;
use crate::metadata::EncryptionMetadata;

/// Encrypt `buffer` in place, deriving the key with MD5 as legacy writers do.
///
/// `metadata` supplies cipher, key size and salt/IV. A hex IV is decoded in
/// place first; a binary IV is used as is. No padding is added, so the
/// buffer must already be a multiple of the cipher block size.
///
/// On error the buffer is left untouched.
///
/// # Errors
///
/// - [`PemcryptError::InvalidArgument`] - empty buffer/password, zero key or IV size,
///   key or IV length the cipher cannot use
/// - [`PemcryptError::Format`] - malformed hex IV
/// - [`PemcryptError::NotAvailable`] - cipher or hash not compiled in / unknown
/// - [`PemcryptError::Alignment`] - buffer not block-aligned
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "aes", feature = "md5"))] {
/// use pemcrypt_rs::aliases::Password;
/// use pemcrypt_rs::{decrypt_buffer, encrypt_buffer, CipherType, EncryptionMetadata};
///
/// let password = Password::new(b"secret".to_vec());
/// let mut body = *b"0123456789abcdef";
///
/// let mut meta = EncryptionMetadata::from_hex_iv(
///     CipherType::AesCbc, 16, "000102030405060708090A0B0C0D0E0F",
/// ).unwrap();
/// encrypt_buffer(&mut meta, &mut body, &password).unwrap();
/// assert_ne!(&body, b"0123456789abcdef");
///
/// decrypt_buffer(&mut meta, &mut body, &password).unwrap();
/// assert_eq!(&body, b"0123456789abcdef");
/// # }
/// ```
#[inline]
pub fn encrypt_buffer(
    metadata: &mut EncryptionMetadata,
    buffer: &mut [u8],
    password: &Password,
) -> Result<(), PemcryptError> {
    encrypt_buffer_with_hash(metadata, buffer, password, HashType::default())
}

/// [`encrypt_buffer`] with an explicit KDF hash.
pub fn encrypt_buffer_with_hash(
    metadata: &mut EncryptionMetadata,
    buffer: &mut [u8],
    password: &Password,
    hash: HashType,
) -> Result<(), PemcryptError> {
    transform_buffer(Direction::Encrypt, metadata, buffer, password, hash)
}
