//! Per-algorithm encrypt/decrypt primitives.
//!
//! Each variant is a set of free functions over byte slices; none of them
//! keeps state between calls. The key is borrowed and never stored.
//!
//! # Blob formats
//!
//! ```text
//! AES (GCM):  nonce (12) || ciphertext || tag (16)
//! DES (CBC):  iv (8)     || pkcs7-padded ciphertext
//! RC4:        keystream output, same length as the input
//! ```
//!
//! A blob is self-contained: decrypting it needs only the same key.

pub mod des_cbc;
pub mod gcm;
pub mod padding;
pub mod random;
pub mod stream;

pub use random::{RandomSource, SystemRandom};
