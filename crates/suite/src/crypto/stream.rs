//! RC4 keystream encryption.
//!
//! Encrypt and decrypt are the same XOR against a keystream derived from the
//! key alone. Output has no framing and no integrity protection: flipping a
//! ciphertext bit flips the same plaintext bit.

use rc4::{consts::U16, KeyInit, Rc4, StreamCipher};

use crate::error::CipherError;

/// Key length used for RC4 (16 bytes = 128 bits).
pub const KEY_LEN: usize = 16;

const NAME: &str = "RC4";

/// XOR `data` with the RC4 keystream for `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeySize`] if `key` is not [`KEY_LEN`] bytes.
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    let invalid = || CipherError::InvalidKeySize {
        algorithm: NAME,
        expected: KEY_LEN,
        actual: key.len(),
    };
    if key.len() != KEY_LEN {
        return Err(invalid());
    }
    let mut cipher = Rc4::<U16>::new_from_slice(key).map_err(|_| invalid())?;
    let mut out = data.to_vec();
    cipher.apply_keystream(&mut out);
    Ok(out)
}

/// Recover the input of [`encrypt`] by applying the same keystream again.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeySize`] if `key` is not [`KEY_LEN`] bytes.
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    encrypt(data, key)
}
