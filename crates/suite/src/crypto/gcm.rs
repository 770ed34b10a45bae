//! AES-128-GCM authenticated encryption of whole buffers.
//!
//! A fresh random 96-bit nonce is drawn for every call and written in front of
//! the sealed output. GCM nonce reuse under one key breaks both confidentiality
//! and authentication, so the nonce is never derived from the input.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes128Gcm, Nonce,
};

use super::random::{RandomSource, SystemRandom};
use crate::error::CipherError;

/// Byte length of an AES-128 key (16 bytes = 128 bits).
pub const KEY_LEN: usize = 16;

/// Byte length of the GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag appended by the seal operation.
pub const TAG_LEN: usize = 16;

const NAME: &str = "AES";

/// Encrypt `plaintext` with a nonce from the OS CSPRNG.
///
/// Output layout: `nonce (12) || ciphertext || tag (16)`.
///
/// # Errors
///
/// See [`encrypt_with`].
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    encrypt_with(plaintext, key, &SystemRandom)
}

/// Encrypt `plaintext`, drawing the nonce from `rng`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeySize`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`CipherError::RandomSourceFailure`] if no nonce can be generated.
pub fn encrypt_with<R>(plaintext: &[u8], key: &[u8], rng: &R) -> Result<Vec<u8>, CipherError>
where
    R: RandomSource + ?Sized,
{
    let cipher = build_cipher(key)?;

    let mut nonce = [0u8; NONCE_LEN];
    rng.fill(&mut nonce)?;

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| CipherError::MalformedInput("plaintext too long for GCM"))?;

    let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&sealed);
    Ok(blob)
}

/// Verify and decrypt a blob produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeySize`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`CipherError::MalformedInput`] if `blob` is shorter than a nonce.
/// Returns [`CipherError::AuthenticationFailure`] on a wrong key or any tampering.
pub fn decrypt(blob: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    let cipher = build_cipher(key)?;
    if blob.len() < NONCE_LEN {
        return Err(CipherError::MalformedInput("ciphertext too short"));
    }
    let (nonce, sealed) = blob.split_at(NONCE_LEN);
    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| CipherError::AuthenticationFailure)
}

fn build_cipher(key: &[u8]) -> Result<Aes128Gcm, CipherError> {
    let invalid = || CipherError::InvalidKeySize {
        algorithm: NAME,
        expected: KEY_LEN,
        actual: key.len(),
    };
    if key.len() != KEY_LEN {
        return Err(invalid());
    }
    Aes128Gcm::new_from_slice(key).map_err(|_| invalid())
}
