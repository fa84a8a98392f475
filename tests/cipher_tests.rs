//! tests/cipher_tests.rs
//! Raw-key CBC primitives against published vectors

mod common;

use common::unhex;

#[cfg(feature = "aes")]
mod aes_cbc {
    use super::unhex;
    use pemcrypt_rs::{aes_cbc_decrypt_with_key, aes_cbc_encrypt_with_key, ErrorKind};

    #[test]
    fn zero_key_zero_iv_single_block() {
        let mut buffer = [0x41u8; 16];
        aes_cbc_encrypt_with_key(&mut buffer, &[0u8; 16], &[0u8; 16]).unwrap();
        assert_eq!(buffer.to_vec(), unhex("b49cbf19d357e6e1f6845c30fd5b63e3"));

        aes_cbc_decrypt_with_key(&mut buffer, &[0u8; 16], &[0u8; 16]).unwrap();
        assert_eq!(buffer, [0x41u8; 16]);
    }

    #[test]
    fn nist_sp800_38a_cbc_aes128() {
        let key = unhex("2b7e151628aed2a6abf7158809cf4f3c");
        let iv = unhex("000102030405060708090a0b0c0d0e0f");
        let plaintext = unhex(
            "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51",
        );
        let expected = unhex(
            "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2",
        );

        let mut buffer = plaintext.clone();
        aes_cbc_encrypt_with_key(&mut buffer, &key, &iv).unwrap();
        assert_eq!(buffer, expected);

        aes_cbc_decrypt_with_key(&mut buffer, &key, &iv).unwrap();
        assert_eq!(buffer, plaintext);
    }

    #[test]
    fn unaligned_buffer_is_untouched() {
        let mut buffer = [0x5au8; 17];
        let err = aes_cbc_encrypt_with_key(&mut buffer, &[0u8; 16], &[0u8; 16]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Alignment);
        assert_eq!(buffer, [0x5au8; 17]);

        let err = aes_cbc_decrypt_with_key(&mut buffer, &[0u8; 16], &[0u8; 16]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Alignment);
        assert_eq!(buffer, [0x5au8; 17]);
    }

    #[test]
    fn empty_buffer_is_alignment_error() {
        let mut buffer: [u8; 0] = [];
        let err = aes_cbc_encrypt_with_key(&mut buffer, &[0u8; 16], &[0u8; 16]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Alignment);
    }

    #[test]
    fn bad_key_or_iv_length_is_invalid_argument() {
        let mut buffer = [1u8; 32];
        let err = aes_cbc_encrypt_with_key(&mut buffer, &[0u8; 20], &[0u8; 16]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = aes_cbc_encrypt_with_key(&mut buffer, &[0u8; 16], &[0u8; 8]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(buffer, [1u8; 32]);
    }

    #[test]
    fn all_key_sizes_round_trip() {
        for key_len in [16usize, 24, 32] {
            let key = vec![0x33u8; key_len];
            let mut buffer = [0x77u8; 48];
            aes_cbc_encrypt_with_key(&mut buffer, &key, &[9u8; 16]).unwrap();
            assert_ne!(buffer, [0x77u8; 48]);
            aes_cbc_decrypt_with_key(&mut buffer, &key, &[9u8; 16]).unwrap();
            assert_eq!(buffer, [0x77u8; 48], "AES-{}", key_len * 8);
        }
    }

    #[test]
    fn identical_blocks_encrypt_differently() {
        let mut buffer = [0u8; 32];
        aes_cbc_encrypt_with_key(&mut buffer, &[7u8; 16], &[0u8; 16]).unwrap();
        assert_ne!(buffer[..16], buffer[16..]);
    }
}

#[cfg(feature = "des")]
mod des_cbc {
    use super::unhex;
    use pemcrypt_rs::{
        des3_cbc_decrypt_with_key, des3_cbc_encrypt_with_key, des_cbc_decrypt_with_key,
        des_cbc_encrypt_with_key, ErrorKind,
    };

    const IV: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
    const PLAINTEXT: &[u8; 24] = b"Now is the time for all ";

    #[test]
    fn des_reference_vector() {
        let key = unhex("0123456789abcdef");
        let mut buffer = *PLAINTEXT;
        des_cbc_encrypt_with_key(&mut buffer, &key, &IV).unwrap();
        assert_eq!(
            buffer.to_vec(),
            unhex("dc34efb9942bec3a36779ac33cb3f218bfadfe067db20e85")
        );

        des_cbc_decrypt_with_key(&mut buffer, &key, &IV).unwrap();
        assert_eq!(&buffer, PLAINTEXT);
    }

    #[test]
    fn des3_reference_vector() {
        let key = unhex("0123456789abcdef23456789abcdef01456789abcdef0123");
        let mut buffer = *PLAINTEXT;
        des3_cbc_encrypt_with_key(&mut buffer, &key, &IV).unwrap();
        assert_eq!(
            buffer.to_vec(),
            unhex("f4bf2a12fef723b93a92b75154a095d1012e94dba786335f")
        );

        des3_cbc_decrypt_with_key(&mut buffer, &key, &IV).unwrap();
        assert_eq!(&buffer, PLAINTEXT);
    }

    #[test]
    fn des_block_is_eight_bytes() {
        let mut buffer = [0u8; 12];
        let err = des_cbc_encrypt_with_key(&mut buffer, &[1u8; 8], &IV).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Alignment);
        assert_eq!(buffer, [0u8; 12]);

        let mut buffer = [0u8; 8];
        des_cbc_encrypt_with_key(&mut buffer, &[1u8; 8], &IV).unwrap();
    }

    #[test]
    fn wrong_key_sizes_are_rejected() {
        let mut buffer = [0u8; 16];
        let err = des_cbc_encrypt_with_key(&mut buffer, &[1u8; 16], &IV).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = des3_cbc_decrypt_with_key(&mut buffer, &[1u8; 16], &IV).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(buffer, [0u8; 16]);
    }
}
