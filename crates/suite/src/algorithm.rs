//! [`Algorithm`]: the closed set of cipher variants and the name selector.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::crypto::{des_cbc, gcm, stream, RandomSource, SystemRandom};
use crate::error::CipherError;

/// A supported symmetric algorithm.
///
/// | Variant | Mode     | Key     | Blob                        |
/// |---------|----------|---------|-----------------------------|
/// | `Aes`   | GCM      | 16 B    | `nonce ‖ ciphertext ‖ tag`  |
/// | `Des`   | CBC      | 8 B     | `iv ‖ padded ciphertext`    |
/// | `Rc4`   | stream   | 16 B    | keystream output            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// AES-128-GCM, authenticated.
    Aes,
    /// DES-CBC with PKCS#7 padding, not authenticated.
    Des,
    /// RC4 keystream, not authenticated.
    Rc4,
}

impl Algorithm {
    /// Every supported algorithm, in selector order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Aes, Algorithm::Des, Algorithm::Rc4];

    /// Canonical upper-case name accepted by [`resolve_algorithm`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Aes => "AES",
            Algorithm::Des => "DES",
            Algorithm::Rc4 => "RC4",
        }
    }

    /// Exact key length in bytes this algorithm accepts.
    pub fn required_key_size(self) -> usize {
        match self {
            Algorithm::Aes => gcm::KEY_LEN,
            Algorithm::Des => des_cbc::KEY_LEN,
            Algorithm::Rc4 => stream::KEY_LEN,
        }
    }

    /// Length of the blob that encrypting `plaintext_len` bytes produces.
    pub fn blob_len(self, plaintext_len: usize) -> usize {
        match self {
            Algorithm::Aes => gcm::NONCE_LEN + plaintext_len + gcm::TAG_LEN,
            Algorithm::Des => {
                let bs = des_cbc::BLOCK_SIZE;
                bs + (plaintext_len / bs + 1) * bs
            }
            Algorithm::Rc4 => plaintext_len,
        }
    }

    /// Encrypt `plaintext` under `key`, using the OS CSPRNG for any nonce or IV.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeySize`] for a key of the wrong length and
    /// [`CipherError::RandomSourceFailure`] if the OS CSPRNG fails.
    pub fn encrypt(self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt_with(plaintext, key, &SystemRandom)
    }

    /// Encrypt `plaintext` under `key`, drawing any nonce or IV from `rng`.
    ///
    /// RC4 needs no randomness and never calls `rng`.
    ///
    /// # Errors
    ///
    /// See [`Algorithm::encrypt`].
    pub fn encrypt_with<R>(
        self,
        plaintext: &[u8],
        key: &[u8],
        rng: &R,
    ) -> Result<Vec<u8>, CipherError>
    where
        R: RandomSource + ?Sized,
    {
        debug!(algorithm = self.name(), len = plaintext.len(), "encrypt");
        match self {
            Algorithm::Aes => gcm::encrypt_with(plaintext, key, rng),
            Algorithm::Des => des_cbc::encrypt_with(plaintext, key, rng),
            Algorithm::Rc4 => stream::encrypt(plaintext, key),
        }
    }

    /// Decrypt a blob previously produced by [`Algorithm::encrypt`] with the same key.
    ///
    /// On failure no partial plaintext is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeySize`], [`CipherError::MalformedInput`],
    /// [`CipherError::AuthenticationFailure`] (AES only) or
    /// [`CipherError::InvalidPadding`] (DES only).
    pub fn decrypt(self, blob: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        debug!(algorithm = self.name(), len = blob.len(), "decrypt");
        match self {
            Algorithm::Aes => gcm::decrypt(blob, key),
            Algorithm::Des => des_cbc::decrypt(blob, key),
            Algorithm::Rc4 => stream::decrypt(blob, key),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_algorithm(s)
    }
}

/// Map an algorithm name to its variant, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`CipherError::UnsupportedAlgorithm`] for any name outside
/// `AES`, `DES` and `RC4`.
pub fn resolve_algorithm(name: &str) -> Result<Algorithm, CipherError> {
    Algorithm::ALL
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| CipherError::UnsupportedAlgorithm(name.to_owned()))
}
