//! Random-byte source used for nonces and IVs.

use aes_gcm::aead::{rand_core::RngCore, OsRng};

use crate::error::CipherError;

/// A source of cryptographically secure random bytes.
///
/// Variants never reach for a process-wide generator on their own; the source
/// is passed into `encrypt_with` so tests can substitute a deterministic or
/// failing implementation.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::RandomSourceFailure`] if the source cannot
    /// produce bytes. Implementations must not fall back to a weaker source.
    fn fill(&self, buf: &mut [u8]) -> Result<(), CipherError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), CipherError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| CipherError::RandomSourceFailure(e.to_string()))
    }
}
