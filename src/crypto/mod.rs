// src/crypto/mod.rs

//! Low-level crypto primitives: the legacy KDF and the scoped key it produces.
//!
//! See crate root for re-exports (e.g. `derive_legacy_key`).

pub(crate) mod derived_key;
pub mod kdf;
#[cfg(feature = "rand")]
pub mod rng;
