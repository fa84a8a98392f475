// src/crypto/rng.rs
//! OS randomness for fresh salts/IVs (feature `rand`).
//!
//! Only encryption of a brand-new container needs this; decryption reads the
//! salt from the header.

use crate::error::PemcryptError;
use rand::{rngs::OsRng, TryRngCore};

/// Fill `dest` from the operating system RNG.
///
/// # Errors
///
/// [`PemcryptError::Crypto`] if the OS RNG is unavailable.
#[inline]
pub fn fill_random(dest: &mut [u8]) -> Result<(), PemcryptError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| PemcryptError::Crypto(format!("OS RNG failed: {e}")))
}
