// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt_buffer(&mut metadata, &mut buffer, &password)?`.

pub(crate) mod encrypt;

pub use encrypt::{encrypt_buffer, encrypt_buffer_with_hash};
