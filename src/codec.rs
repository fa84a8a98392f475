//! src/codec.rs
//! The password → key → CBC pipeline shared by encryption and decryption.
//!
//! Stage order: validate → decode salt/IV → derive key → run cipher. The
//! first failing stage ends the call. The derived key is a scoped value, so
//! it is wiped exactly once when this function returns, whichever way it does.

use crate::aliases::Password;
use crate::block_cipher::{self, Direction};
use crate::crypto::derived_key::DerivedKey;
use crate::crypto::kdf::legacy::HashType;
use crate::error::PemcryptError;
use crate::metadata::EncryptionMetadata;
use tracing::{debug, trace};

pub(crate) fn transform_buffer(
    direction: Direction,
    metadata: &mut EncryptionMetadata,
    buffer: &mut [u8],
    password: &Password,
    hash: HashType,
) -> Result<(), PemcryptError> {
    validate(direction, metadata, buffer, password).inspect_err(|e| {
        debug!(%direction, error = %e, "rejected input");
    })?;

    // Header salt doubles as the CBC IV.
    metadata.decode_iv()?;
    trace!(
        %direction,
        cipher = %metadata.cipher_type,
        key_size = metadata.key_size,
        iv_size = metadata.iv_size(),
        %hash,
        "salt decoded"
    );

    let key = DerivedKey::derive(password, metadata.iv(), metadata.key_size, hash)?;

    block_cipher::run(
        metadata.cipher_type,
        direction,
        key.expose_secret(),
        metadata.iv(),
        buffer,
    )?;

    debug!(%direction, cipher = %metadata.cipher_type, len = buffer.len(), "buffer transformed");
    Ok(())
}

fn validate(
    direction: Direction,
    metadata: &EncryptionMetadata,
    buffer: &[u8],
    password: &Password,
) -> Result<(), PemcryptError> {
    if buffer.is_empty() {
        return Err(PemcryptError::InvalidArgument("empty buffer".into()));
    }
    if password.expose_secret().is_empty() {
        return Err(PemcryptError::InvalidArgument("empty password".into()));
    }
    if metadata.key_size == 0 {
        return Err(PemcryptError::InvalidArgument("key size is zero".into()));
    }
    // `None`/`Unsupported` fall through to the back-end lookup (NotAvailable).
    let cipher = metadata.cipher_type;
    if cipher.block_size().is_some() && !cipher.accepts_key_size(metadata.key_size) {
        return Err(PemcryptError::InvalidArgument(format!(
            "{cipher} cannot use a {}-byte key",
            metadata.key_size
        )));
    }
    if direction == Direction::Encrypt && metadata.iv_size() == 0 {
        return Err(PemcryptError::InvalidArgument("IV size is zero".into()));
    }
    Ok(())
}
