//! src/crypto/derived_key.rs
//! Ephemeral password-derived key, scoped to one encrypt/decrypt call.
//!
//! Key sizes are bounded by [`MAX_KEY_SIZE`], so the bytes live on the stack
//! in a secure-gate buffer. Dropping the value wipes it, which covers every
//! exit path of the call that owns it, early `?` returns and unwinding included.

use crate::aliases::{KeyBuffer32, Password};
use crate::consts::MAX_KEY_SIZE;
use crate::crypto::kdf::legacy::{derive_into, HashType};
use crate::error::PemcryptError;
use zeroize::Zeroize;

#[cfg(test)]
thread_local! {
    /// Number of keys wiped on this thread.
    pub(crate) static WIPES: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Key material produced by the legacy KDF. Not `Clone`; never leaves the call.
pub(crate) struct DerivedKey {
    bytes: KeyBuffer32,
    len: usize,
}

impl DerivedKey {
    /// Run the KDF and return the finished key.
    ///
    /// On failure no `DerivedKey` exists, and the scratch buffer is wiped
    /// by its own drop.
    pub(crate) fn derive(
        password: &Password,
        salt: &[u8],
        key_size: usize,
        hash: HashType,
    ) -> Result<Self, PemcryptError> {
        if key_size > MAX_KEY_SIZE {
            return Err(PemcryptError::InvalidArgument(format!(
                "key size {key_size} exceeds {MAX_KEY_SIZE}"
            )));
        }

        let mut key = Self {
            bytes: KeyBuffer32::new([0u8; MAX_KEY_SIZE]),
            len: key_size,
        };
        derive_into(
            password.expose_secret(),
            salt,
            hash,
            &mut key.bytes.expose_secret_mut()[..key_size],
        )?;
        Ok(key)
    }

    #[inline]
    pub(crate) fn expose_secret(&self) -> &[u8] {
        &self.bytes.expose_secret()[..self.len]
    }

    fn wipe(&mut self) {
        self.bytes.expose_secret_mut().zeroize();
        self.len = 0;
        #[cfg(test)]
        WIPES.with(|w| w.set(w.get() + 1));
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.wipe();
    }
}
