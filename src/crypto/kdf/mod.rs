//! # Key Derivation
//!
//! - [`legacy`] - single-iteration hash-chaining KDF of legacy encrypted-key headers
//!
//! Most callers never touch this directly: [`encrypt_buffer`](crate::encrypt_buffer)
//! and [`decrypt_buffer`](crate::decrypt_buffer) derive the key themselves.

pub mod legacy;
