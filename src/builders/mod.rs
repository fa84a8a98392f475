//! # Builders
//!
//! - [`BufferCodec`] - reusable encrypt/decrypt configuration (KDF hash)

pub mod codec_builder;

pub use codec_builder::BufferCodec;
