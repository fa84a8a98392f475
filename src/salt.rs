//! Hex salt/IV normalization.
//!
//! Legacy headers store the salt as ASCII hex; the KDF and the CBC layer need
//! the binary bytes. Decoding happens over the same storage the text lived in.

use crate::error::PemcryptError;
use tracing::trace;
use zeroize::Zeroize;

/// Decode the first `len` bytes of `storage` from hex, writing the binary
/// result over the front of the same array.
///
/// Returns the decoded length (`len / 2`). The bytes between the decoded
/// length and `len` are zeroed so no stale text survives. On error the
/// storage is left as it was.
///
/// # Errors
///
/// - [`PemcryptError::InvalidArgument`] if `len` exceeds the storage
/// - [`PemcryptError::Format`] if `len` is odd or a character is not hex
pub fn decode_hex_in_place<const N: usize>(
    storage: &mut [u8; N],
    len: usize,
) -> Result<usize, PemcryptError> {
    if len > N {
        return Err(PemcryptError::InvalidArgument(format!(
            "hex length {len} exceeds IV capacity {N}"
        )));
    }
    if len % 2 != 0 {
        return Err(PemcryptError::Format(format!("odd hex length {len}")));
    }

    let decoded_len = len / 2;
    let mut decoded = [0u8; N];
    hex::decode_to_slice(&storage[..len], &mut decoded[..decoded_len]).map_err(|e| {
        trace!(len, "rejected hex salt");
        PemcryptError::from(e)
    })?;

    storage[..decoded_len].copy_from_slice(&decoded[..decoded_len]);
    storage[decoded_len..len].fill(0);
    decoded.zeroize();

    Ok(decoded_len)
}

/// Uppercase hex text of `bytes`, as legacy DEK-Info headers write it.
///
/// Case is normalised: decoding `"ff"` and encoding again gives `"FF"`, so
/// `encode_hex(decode(x))` equals `x` up to ASCII case.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}
