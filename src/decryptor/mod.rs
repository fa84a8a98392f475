// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt_buffer(&mut metadata, &mut buffer, &password)?`.

pub(crate) mod decrypt;

pub use decrypt::{decrypt_buffer, decrypt_buffer_with_hash};
