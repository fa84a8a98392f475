//! # Encryption Metadata
//!
//! The cipher identifier, key size and salt/IV pulled from a legacy
//! encrypted-key header (`DEK-Info: AES-128-CBC,<hex iv>`). The same salt
//! bytes feed the KDF and seed CBC chaining; that coupling is part of the
//! header format and nothing else in the crate relies on it.

use crate::consts::{
    AES_BLOCK_SIZE, AES_KEY_SIZES, DES3_KEY_SIZE, DES_BLOCK_SIZE, DES_KEY_SIZE, IV_HEX_CAPACITY,
    MAX_IV_SIZE,
};
use crate::error::PemcryptError;
use crate::salt::{decode_hex_in_place, encode_hex};
use std::fmt;

/// Cipher named by a header.
///
/// Numeric identifiers follow the legacy cipher-type table, so values read
/// from an existing container map straight through [`CipherType::from_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherType {
    /// No encryption. Never dispatches to a back-end.
    #[default]
    None,
    /// Single DES in CBC mode.
    DesCbc,
    /// Three-key 3DES (EDE) in CBC mode.
    Des3Cbc,
    /// AES-128/192/256 in CBC mode, chosen by key size.
    AesCbc,
    /// An identifier this crate does not know.
    Unsupported(u8),
}

impl CipherType {
    /// Map a legacy numeric cipher identifier.
    #[must_use]
    pub const fn from_id(id: u8) -> Self {
        match id {
            0 => CipherType::None,
            2 => CipherType::AesCbc,
            7 => CipherType::Des3Cbc,
            8 => CipherType::DesCbc,
            other => CipherType::Unsupported(other),
        }
    }

    /// Legacy numeric identifier of this cipher.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            CipherType::None => 0,
            CipherType::AesCbc => 2,
            CipherType::Des3Cbc => 7,
            CipherType::DesCbc => 8,
            CipherType::Unsupported(id) => id,
        }
    }

    /// Resolve a header cipher name to its type and key size.
    ///
    /// Matching is case-insensitive. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<(Self, usize)> {
        let name = name.trim().to_ascii_uppercase();
        match name.as_str() {
            "DES-CBC" => Some((CipherType::DesCbc, DES_KEY_SIZE)),
            "DES-EDE3-CBC" => Some((CipherType::Des3Cbc, DES3_KEY_SIZE)),
            "AES-128-CBC" => Some((CipherType::AesCbc, 16)),
            "AES-192-CBC" => Some((CipherType::AesCbc, 24)),
            "AES-256-CBC" => Some((CipherType::AesCbc, 32)),
            _ => None,
        }
    }

    /// Block size of the cipher, or `None` for `None`/`Unsupported`.
    #[must_use]
    pub const fn block_size(self) -> Option<usize> {
        match self {
            CipherType::AesCbc => Some(AES_BLOCK_SIZE),
            CipherType::DesCbc | CipherType::Des3Cbc => Some(DES_BLOCK_SIZE),
            CipherType::None | CipherType::Unsupported(_) => None,
        }
    }

    /// Whether `key_size` is a valid key length for this cipher.
    #[must_use]
    pub fn accepts_key_size(self, key_size: usize) -> bool {
        match self {
            CipherType::AesCbc => AES_KEY_SIZES.contains(&key_size),
            CipherType::DesCbc => key_size == DES_KEY_SIZE,
            CipherType::Des3Cbc => key_size == DES3_KEY_SIZE,
            CipherType::None | CipherType::Unsupported(_) => false,
        }
    }
}

impl fmt::Display for CipherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherType::None => f.write_str("NONE"),
            CipherType::DesCbc => f.write_str("DES-CBC"),
            CipherType::Des3Cbc => f.write_str("DES-EDE3-CBC"),
            CipherType::AesCbc => f.write_str("AES-CBC"),
            CipherType::Unsupported(id) => write!(f, "cipher #{id}"),
        }
    }
}

/// Whether the IV field currently holds header text or decoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IvForm {
    /// ASCII hex text as read from a header; decoded before use.
    Hex,
    /// Raw IV bytes, ready for the KDF and the cipher.
    Binary,
}

/// Header metadata for one encrypted buffer.
///
/// Owned by the caller. Encryption and decryption only ever modify it by
/// decoding the IV field in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionMetadata {
    /// Cipher to run.
    pub cipher_type: CipherType,
    /// Key length in bytes that the KDF must produce.
    pub key_size: usize,
    iv: [u8; IV_HEX_CAPACITY],
    iv_size: usize,
    iv_form: IvForm,
}

impl EncryptionMetadata {
    /// Metadata whose IV is hex text, as read from a header.
    ///
    /// # Errors
    ///
    /// [`PemcryptError::InvalidArgument`] if the text does not fit the IV field.
    pub fn from_hex_iv(
        cipher_type: CipherType,
        key_size: usize,
        hex_iv: &str,
    ) -> Result<Self, PemcryptError> {
        let text = hex_iv.trim().as_bytes();
        if text.len() > IV_HEX_CAPACITY {
            return Err(PemcryptError::InvalidArgument(format!(
                "hex IV of {} chars exceeds {IV_HEX_CAPACITY}",
                text.len()
            )));
        }
        let mut iv = [0u8; IV_HEX_CAPACITY];
        iv[..text.len()].copy_from_slice(text);
        Ok(Self {
            cipher_type,
            key_size,
            iv,
            iv_size: text.len(),
            iv_form: IvForm::Hex,
        })
    }

    /// Metadata whose IV is already binary, as a writer builds it.
    ///
    /// # Errors
    ///
    /// [`PemcryptError::InvalidArgument`] if the IV is longer than [`MAX_IV_SIZE`].
    pub fn from_binary_iv(
        cipher_type: CipherType,
        key_size: usize,
        binary_iv: &[u8],
    ) -> Result<Self, PemcryptError> {
        if binary_iv.len() > MAX_IV_SIZE {
            return Err(PemcryptError::InvalidArgument(format!(
                "IV of {} bytes exceeds {MAX_IV_SIZE}",
                binary_iv.len()
            )));
        }
        let mut iv = [0u8; IV_HEX_CAPACITY];
        iv[..binary_iv.len()].copy_from_slice(binary_iv);
        Ok(Self {
            cipher_type,
            key_size,
            iv,
            iv_size: binary_iv.len(),
            iv_form: IvForm::Binary,
        })
    }

    /// Metadata for a header cipher name such as `AES-256-CBC`.
    ///
    /// # Errors
    ///
    /// [`PemcryptError::NotAvailable`] for an unknown cipher name, otherwise
    /// as [`EncryptionMetadata::from_hex_iv`].
    pub fn from_cipher_name(name: &str, hex_iv: &str) -> Result<Self, PemcryptError> {
        let (cipher_type, key_size) = CipherType::from_name(name)
            .ok_or_else(|| PemcryptError::NotAvailable(format!("unknown cipher name {name:?}")))?;
        Self::from_hex_iv(cipher_type, key_size, hex_iv)
    }

    /// Metadata with a fresh random binary IV of the cipher's block size.
    ///
    /// # Errors
    ///
    /// - [`PemcryptError::NotAvailable`] if the cipher has no block size
    /// - [`PemcryptError::Crypto`] if the OS RNG fails
    #[cfg(feature = "rand")]
    pub fn generate(cipher_type: CipherType, key_size: usize) -> Result<Self, PemcryptError> {
        let block_size = cipher_type
            .block_size()
            .ok_or_else(|| PemcryptError::NotAvailable(format!("{cipher_type} has no IV")))?;
        let mut iv = [0u8; MAX_IV_SIZE];
        crate::crypto::rng::fill_random(&mut iv[..block_size])?;
        Self::from_binary_iv(cipher_type, key_size, &iv[..block_size])
    }

    /// Current IV bytes: hex text before decoding, binary after.
    #[must_use]
    pub fn iv(&self) -> &[u8] {
        &self.iv[..self.iv_size]
    }

    /// Current IV length in bytes.
    #[must_use]
    pub const fn iv_size(&self) -> usize {
        self.iv_size
    }

    /// Whether [`iv`](Self::iv) currently returns hex text or binary bytes.
    #[must_use]
    pub const fn iv_form(&self) -> IvForm {
        self.iv_form
    }

    /// Normalize the IV field to binary. A no-op once it is binary.
    ///
    /// # Errors
    ///
    /// [`PemcryptError::Format`] for malformed hex; the field is unchanged.
    pub fn decode_iv(&mut self) -> Result<(), PemcryptError> {
        if self.iv_form == IvForm::Binary {
            return Ok(());
        }
        self.iv_size = decode_hex_in_place(&mut self.iv, self.iv_size)?;
        self.iv_form = IvForm::Binary;
        Ok(())
    }

    /// The IV as header text.
    #[must_use]
    pub fn iv_hex(&self) -> String {
        match self.iv_form {
            IvForm::Hex => String::from_utf8_lossy(self.iv()).into_owned(),
            IvForm::Binary => encode_hex(self.iv()),
        }
    }

    /// `DEK-Info` style header line value: `<cipher name>,<hex iv>`.
    ///
    /// Returns `None` when the cipher/key-size pair has no header name.
    #[must_use]
    pub fn dek_info(&self) -> Option<String> {
        let name = match (self.cipher_type, self.key_size) {
            (CipherType::DesCbc, DES_KEY_SIZE) => "DES-CBC",
            (CipherType::Des3Cbc, DES3_KEY_SIZE) => "DES-EDE3-CBC",
            (CipherType::AesCbc, 16) => "AES-128-CBC",
            (CipherType::AesCbc, 24) => "AES-192-CBC",
            (CipherType::AesCbc, 32) => "AES-256-CBC",
            _ => return None,
        };
        Some(format!("{name},{}", self.iv_hex()))
    }
}
