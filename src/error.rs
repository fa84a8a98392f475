//! # Error Types
//!
//! Every operation in this crate returns [`Result<T, PemcryptError>`](PemcryptError).
//! The first failing pipeline stage decides the error; later stages never run.

use thiserror::Error;

/// The error type for all key-container operations.
#[derive(Error, Debug)]
pub enum PemcryptError {
    /// Bad caller input: empty password or buffer, zero key size,
    /// key or IV length the selected cipher cannot use.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A heap allocation on the unbounded KDF path failed.
    #[error("Out of memory")]
    OutOfMemory,

    /// Malformed hex salt/IV text (odd length or non-hex character).
    #[error("Format error: {0}")]
    Format(String),

    /// Buffer length is zero or not a multiple of the cipher block size.
    ///
    /// The buffer is left untouched when this is returned.
    #[error("Alignment error: {len} bytes is not a non-zero multiple of {block_size}")]
    Alignment { len: usize, block_size: usize },

    /// Cipher or hash is unrecognized or was disabled at build time.
    #[error("Not available: {0}")]
    NotAvailable(String),

    /// The KDF was asked for an output it cannot produce.
    #[error("Buffer error: {0}")]
    Buffer(String),

    /// Cipher-internal failure, propagated unchanged.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

/// Coarse error category, for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfMemory,
    Format,
    Alignment,
    NotAvailable,
    Buffer,
    Crypto,
}

impl PemcryptError {
    /// The category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            PemcryptError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            PemcryptError::OutOfMemory => ErrorKind::OutOfMemory,
            PemcryptError::Format(_) => ErrorKind::Format,
            PemcryptError::Alignment { .. } => ErrorKind::Alignment,
            PemcryptError::NotAvailable(_) => ErrorKind::NotAvailable,
            PemcryptError::Buffer(_) => ErrorKind::Buffer,
            PemcryptError::Crypto(_) => ErrorKind::Crypto,
        }
    }
}

impl From<hex::FromHexError> for PemcryptError {
    fn from(err: hex::FromHexError) -> Self {
        PemcryptError::Format(err.to_string())
    }
}

impl From<std::collections::TryReserveError> for PemcryptError {
    fn from(_: std::collections::TryReserveError) -> Self {
        PemcryptError::OutOfMemory
    }
}

impl From<cipher::InvalidLength> for PemcryptError {
    fn from(_: cipher::InvalidLength) -> Self {
        PemcryptError::InvalidArgument("key length rejected by cipher".into())
    }
}
