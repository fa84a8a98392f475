//! tests/codec_tests.rs
//! encrypt_buffer / decrypt_buffer: error paths and buffer/metadata effects

mod common;

use common::{password, AES_IV_HEX, DES_IV_HEX, TEST_PASSWORD};
use pemcrypt_rs::{
    decrypt_buffer, decrypt_buffer_with_hash, encrypt_buffer, encrypt_buffer_with_hash,
    CipherType, EncryptionMetadata, ErrorKind, HashType, IvForm,
};

fn aes128() -> EncryptionMetadata {
    EncryptionMetadata::from_hex_iv(CipherType::AesCbc, 16, AES_IV_HEX).unwrap()
}

#[test]
fn none_and_unsupported_ciphers_are_not_available() {
    let pw = password(TEST_PASSWORD);
    for cipher in [CipherType::None, CipherType::from_id(42)] {
        let mut meta = EncryptionMetadata::from_hex_iv(cipher, 16, AES_IV_HEX).unwrap();
        let mut buffer = [0x11u8; 32];
        let err = decrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAvailable, "{cipher}");
        assert_eq!(buffer, [0x11u8; 32]);
    }
}

#[test]
fn empty_buffer_and_password_are_invalid() {
    let pw = password(TEST_PASSWORD);
    let mut empty: [u8; 0] = [];
    let err = encrypt_buffer(&mut aes128(), &mut empty, &pw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let mut buffer = [0u8; 16];
    let err = decrypt_buffer(&mut aes128(), &mut buffer, &password(b"")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(buffer, [0u8; 16]);
}

#[test]
fn zero_key_size_is_invalid() {
    let pw = password(TEST_PASSWORD);
    let mut meta = EncryptionMetadata::from_hex_iv(CipherType::AesCbc, 0, AES_IV_HEX).unwrap();
    let mut buffer = [0u8; 16];
    let err = encrypt_buffer(&mut meta, &mut buffer, &pw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn encrypt_without_iv_is_invalid() {
    let pw = password(TEST_PASSWORD);
    let mut meta = EncryptionMetadata::from_binary_iv(CipherType::AesCbc, 16, &[]).unwrap();
    let mut buffer = [3u8; 16];
    let err = encrypt_buffer(&mut meta, &mut buffer, &pw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(buffer, [3u8; 16]);
}

#[test]
fn decrypt_without_iv_fails_and_leaves_buffer() {
    let pw = password(TEST_PASSWORD);
    let mut meta = EncryptionMetadata::from_hex_iv(CipherType::AesCbc, 16, "").unwrap();
    let mut buffer = [3u8; 16];
    assert!(decrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256).is_err());
    assert_eq!(buffer, [3u8; 16]);
}

#[test]
fn key_size_the_cipher_cannot_use_is_rejected_before_decoding() {
    let pw = password(TEST_PASSWORD);
    let cases = [
        (CipherType::AesCbc, 20, AES_IV_HEX),
        (CipherType::DesCbc, 16, DES_IV_HEX),
        (CipherType::Des3Cbc, 16, DES_IV_HEX),
    ];
    for (cipher, key_size, iv_hex) in cases {
        let mut meta = EncryptionMetadata::from_hex_iv(cipher, key_size, iv_hex).unwrap();
        let before = meta.clone();
        let mut buffer = [0x5cu8; 32];
        let err = encrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{cipher}/{key_size}");
        assert_eq!(buffer, [0x5cu8; 32]);
        assert_eq!(meta, before);
        assert_eq!(meta.iv_form(), IvForm::Hex);
    }
}

#[test]
fn malformed_hex_iv_is_format_error() {
    let pw = password(TEST_PASSWORD);
    for bad in ["0001020", "zz0102030405060708090a0b0c0d0e0f"] {
        let mut meta = EncryptionMetadata::from_hex_iv(CipherType::AesCbc, 16, bad).unwrap();
        let mut buffer = [9u8; 16];
        let err = decrypt_buffer(&mut meta, &mut buffer, &pw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "{bad}");
        assert_eq!(buffer, [9u8; 16]);
        assert_eq!(meta.iv_form(), IvForm::Hex);
    }
}

#[test]
fn oversized_key_is_invalid() {
    let pw = password(TEST_PASSWORD);
    let mut meta = EncryptionMetadata::from_hex_iv(CipherType::AesCbc, 33, AES_IV_HEX).unwrap();
    let mut buffer = [0u8; 16];
    let err = encrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha512).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[cfg(feature = "aes")]
mod aes {
    use super::*;

    #[test]
    fn unaligned_buffer_is_alignment_error_and_untouched() {
        let pw = password(TEST_PASSWORD);
        let mut buffer = [0x42u8; 17];
        let err =
            encrypt_buffer_with_hash(&mut aes128(), &mut buffer, &pw, HashType::Sha256).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Alignment);
        assert_eq!(buffer, [0x42u8; 17]);
    }

    #[test]
    fn unusable_key_size_is_invalid() {
        let pw = password(TEST_PASSWORD);
        let mut meta = EncryptionMetadata::from_hex_iv(CipherType::AesCbc, 20, AES_IV_HEX).unwrap();
        let mut buffer = [0u8; 16];
        let err =
            encrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(buffer, [0u8; 16]);
    }

    #[test]
    fn iv_is_decoded_in_place_and_reused() {
        let pw = password(TEST_PASSWORD);
        let mut meta = aes128();
        let mut buffer = [0x24u8; 32];

        encrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256).unwrap();
        assert_eq!(meta.iv_form(), IvForm::Binary);
        assert_eq!(meta.iv_size(), 16);
        assert_eq!(meta.iv_hex(), AES_IV_HEX);

        // Already-decoded metadata drives the decrypt directly.
        decrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256).unwrap();
        assert_eq!(buffer, [0x24u8; 32]);
    }

    #[test]
    fn wrong_password_does_not_restore_plaintext() {
        let mut buffer = [0x24u8; 32];
        encrypt_buffer_with_hash(&mut aes128(), &mut buffer, &password(b"right"), HashType::Sha256)
            .unwrap();
        decrypt_buffer_with_hash(&mut aes128(), &mut buffer, &password(b"wrong"), HashType::Sha256)
            .unwrap();
        assert_ne!(buffer, [0x24u8; 32]);
    }

    #[test]
    fn des_sized_iv_is_too_short_for_aes() {
        let pw = password(TEST_PASSWORD);
        let mut meta = EncryptionMetadata::from_hex_iv(CipherType::AesCbc, 16, DES_IV_HEX).unwrap();
        let mut buffer = [0u8; 16];
        let err =
            encrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(buffer, [0u8; 16]);
    }
}

#[cfg(not(feature = "des"))]
#[test]
fn disabled_des_is_not_available() {
    let pw = password(TEST_PASSWORD);
    let mut meta = EncryptionMetadata::from_hex_iv(CipherType::DesCbc, 8, DES_IV_HEX).unwrap();
    let mut buffer = [0u8; 16];
    let err = decrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAvailable);
}

#[cfg(all(feature = "rand", feature = "des"))]
#[test]
fn generated_metadata_round_trips() {
    let pw = password(TEST_PASSWORD);
    let mut meta = EncryptionMetadata::generate(CipherType::Des3Cbc, 24).unwrap();
    assert_eq!(meta.iv_size(), 8);
    assert_eq!(meta.iv_form(), IvForm::Binary);

    let mut buffer = [0x61u8; 24];
    encrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256).unwrap();
    decrypt_buffer_with_hash(&mut meta, &mut buffer, &pw, HashType::Sha256).unwrap();
    assert_eq!(buffer, [0x61u8; 24]);
}
