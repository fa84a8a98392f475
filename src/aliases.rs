//! # Secure-Gate Type Aliases
//!
//! Secret-bearing types used across the crate. They require an explicit
//! `.expose_secret()` / `.expose_secret_mut()` to reach the bytes and are
//! zeroized on drop.
//!
//! - [`SecretBytes`] - heap secret, e.g. a KDF output of runtime length
//! - [`Password`] - caller password, arbitrary bytes (legacy headers are not UTF-8 aware)
//! - [`SpanBuffer<N>`] - generic secure stack buffer
//! - [`KeyBuffer32`] - stack storage for one derived key, sized for AES-256

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

/// Generic secure stack buffer.
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub SecretBytes, Vec<u8>); // KDF output of runtime length, scratch copies
dynamic_alias!(pub Password, Vec<u8>); // caller password bytes

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub KeyBuffer32, 32); // one derived key, up to MAX_KEY_SIZE bytes
