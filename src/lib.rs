// src/lib.rs

//! Password-based CBC encryption of legacy encrypted key containers.
//!
//! A legacy encrypted private key carries a header such as
//! `DEK-Info: AES-128-CBC,<hex salt>`. The salt is hex-decoded, a key is
//! derived from the password with a single-iteration hash chain, and the body
//! is transformed in place with AES-, DES- or 3DES-CBC. The derived key and
//! every cipher context are wiped before the call returns.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod block_cipher;
pub mod builders;
pub(crate) mod codec;
pub mod consts;
pub mod convert;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod metadata;
pub mod salt;
pub mod utils;

// High-level API: what most callers import
pub use decryptor::{decrypt_buffer, decrypt_buffer_with_hash};
pub use encryptor::{encrypt_buffer, encrypt_buffer_with_hash};
pub use error::{ErrorKind, PemcryptError};
pub use metadata::{CipherType, EncryptionMetadata, IvForm};

pub use builders::BufferCodec;
pub use convert::rekey_buffer;

// Low-level pieces for custom flows: KDF alone, or CBC with an already-derived key
pub use block_cipher::Direction;
pub use crypto::kdf::legacy::{derive_legacy_key, derive_legacy_key_vec, HashType};

#[cfg(feature = "aes")]
pub use block_cipher::{aes_cbc_decrypt_with_key, aes_cbc_encrypt_with_key};
#[cfg(feature = "des")]
pub use block_cipher::{
    des3_cbc_decrypt_with_key, des3_cbc_encrypt_with_key, des_cbc_decrypt_with_key,
    des_cbc_encrypt_with_key,
};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
