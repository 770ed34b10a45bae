//! Pluggable symmetric encryption over in-memory byte buffers.
//!
//! Pick an [`Algorithm`] by name with [`resolve_algorithm`], then call
//! [`Algorithm::encrypt`] / [`Algorithm::decrypt`]. Every encrypt produces a
//! single self-describing blob; see [`crypto`] for the per-variant layouts.
//!
//! ```
//! use cipher_suite::resolve_algorithm;
//!
//! let aes = resolve_algorithm("aes")?;
//! let key = b"1234567890123456";
//! let blob = aes.encrypt(b"Hello, World!", key)?;
//! assert_eq!(blob.len(), 41);
//! assert_eq!(aes.decrypt(&blob, key)?, b"Hello, World!");
//! # Ok::<(), cipher_suite::CipherError>(())
//! ```
//!
//! No operation keeps state between calls, so an [`Algorithm`] value can be
//! shared freely across threads.

pub mod algorithm;
pub mod crypto;
pub mod error;

pub use algorithm::{resolve_algorithm, Algorithm};
pub use crypto::{RandomSource, SystemRandom};
pub use error::CipherError;
