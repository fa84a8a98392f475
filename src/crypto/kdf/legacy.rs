//! src/crypto/kdf/legacy.rs
//! Legacy single-iteration password KDF used by encrypted-key headers.
//!
//! ```text
//! block_0     = H(password || salt)
//! block_{i+1} = H(password || block_i)
//! key         = (block_0 || block_1 || ...)[..key_len]
//! ```
//!
//! The iteration count is pinned at [`LEGACY_KDF_ITERATIONS`] by the file
//! format. Changing the chaining changes every key, so it must stay byte-exact.

use crate::aliases::{Password, SecretBytes};
use crate::consts::LEGACY_KDF_ITERATIONS;
use crate::error::PemcryptError;
use sha2::digest::{Digest, Output};
use std::fmt;
use tracing::trace;
use zeroize::Zeroize;

/// Hash driving the KDF chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashType {
    /// What legacy PEM writers use.
    #[default]
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashType {
    /// Digest length in bytes.
    #[must_use]
    pub const fn digest_size(self) -> usize {
        match self {
            HashType::Md5 => 16,
            HashType::Sha1 => 20,
            HashType::Sha224 => 28,
            HashType::Sha256 => 32,
            HashType::Sha384 => 48,
            HashType::Sha512 => 64,
        }
    }

    /// Whether this build carries the hash.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            HashType::Md5 => cfg!(feature = "md5"),
            HashType::Sha1 => cfg!(feature = "sha1"),
            HashType::Sha224 | HashType::Sha256 | HashType::Sha384 | HashType::Sha512 => true,
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HashType::Md5 => "MD5",
            HashType::Sha1 => "SHA-1",
            HashType::Sha224 => "SHA-224",
            HashType::Sha256 => "SHA-256",
            HashType::Sha384 => "SHA-384",
            HashType::Sha512 => "SHA-512",
        })
    }
}

/// Derive `out_key.len()` bytes of key material directly into `out_key`.
///
/// Nothing is written unless every precondition holds, and once hashing
/// starts it cannot fail, so `out_key` never holds a partial key.
///
/// # Errors
///
/// - [`PemcryptError::Buffer`] if `out_key` is empty
/// - [`PemcryptError::InvalidArgument`] if the password is empty
/// - [`PemcryptError::NotAvailable`] if `hash` is not compiled in
#[inline]
pub fn derive_legacy_key(
    password: &Password,
    salt: &[u8],
    hash: HashType,
    out_key: &mut [u8],
) -> Result<(), PemcryptError> {
    derive_into(password.expose_secret(), salt, hash, out_key)
}

/// Derive `key_len` bytes into a fresh zeroizing heap buffer.
///
/// For callers whose key length is not bounded at compile time.
///
/// # Errors
///
/// As [`derive_legacy_key`], plus [`PemcryptError::OutOfMemory`] if the
/// buffer cannot be allocated.
pub fn derive_legacy_key_vec(
    password: &Password,
    salt: &[u8],
    hash: HashType,
    key_len: usize,
) -> Result<SecretBytes, PemcryptError> {
    check_inputs(password.expose_secret(), hash, key_len)?;

    let mut key = Vec::new();
    key.try_reserve_exact(key_len)?;
    key.resize(key_len, 0);

    let mut key = SecretBytes::new(key);
    derive_into(password.expose_secret(), salt, hash, key.expose_secret_mut())?;
    Ok(key)
}

pub(crate) fn derive_into(
    password: &[u8],
    salt: &[u8],
    hash: HashType,
    out_key: &mut [u8],
) -> Result<(), PemcryptError> {
    check_inputs(password, hash, out_key.len())?;
    trace!(
        %hash,
        key_len = out_key.len(),
        salt_len = salt.len(),
        iterations = LEGACY_KDF_ITERATIONS,
        "deriving legacy key"
    );

    match hash {
        #[cfg(feature = "md5")]
        HashType::Md5 => chain::<md5::Md5>(password, salt, out_key),
        #[cfg(feature = "sha1")]
        HashType::Sha1 => chain::<sha1::Sha1>(password, salt, out_key),
        HashType::Sha224 => chain::<sha2::Sha224>(password, salt, out_key),
        HashType::Sha256 => chain::<sha2::Sha256>(password, salt, out_key),
        HashType::Sha384 => chain::<sha2::Sha384>(password, salt, out_key),
        HashType::Sha512 => chain::<sha2::Sha512>(password, salt, out_key),
        #[allow(unreachable_patterns)]
        _ => return Err(not_available(hash)),
    }
    Ok(())
}

fn check_inputs(password: &[u8], hash: HashType, key_len: usize) -> Result<(), PemcryptError> {
    if key_len == 0 {
        return Err(PemcryptError::Buffer("requested key length is zero".into()));
    }
    if password.is_empty() {
        return Err(PemcryptError::InvalidArgument("empty password".into()));
    }
    if !hash.is_available() {
        return Err(not_available(hash));
    }
    Ok(())
}

fn not_available(hash: HashType) -> PemcryptError {
    PemcryptError::NotAvailable(format!("{hash} is not compiled in"))
}

fn chain<D: Digest>(password: &[u8], salt: &[u8], out_key: &mut [u8]) {
    let mut prev: Option<Output<D>> = None;

    for chunk in out_key.chunks_mut(<D as Digest>::output_size()) {
        let mut hasher = <D as Digest>::new();
        hasher.update(password);
        match &prev {
            Some(block) => hasher.update(block),
            None => hasher.update(salt),
        }
        let block = hasher.finalize();
        chunk.copy_from_slice(&block[..chunk.len()]);

        if let Some(mut old) = prev.replace(block) {
            old.as_mut_slice().zeroize();
        }
    }

    if let Some(mut last) = prev {
        last.as_mut_slice().zeroize();
    }
}
