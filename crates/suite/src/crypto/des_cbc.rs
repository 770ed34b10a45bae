//! DES in CBC mode with PKCS#7 padding.
//!
//! Not authenticated: a modified blob either fails unpadding or decrypts to
//! different bytes. The output carries no MAC, so blobs stay byte-compatible
//! with other tools that use the plain `iv || ciphertext` layout.

use cbc::cipher::{generic_array::GenericArray, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use des::Des;

use super::padding;
use super::random::{RandomSource, SystemRandom};
use crate::error::CipherError;

type DesCbcEnc = cbc::Encryptor<Des>;
type DesCbcDec = cbc::Decryptor<Des>;

/// Byte length of a DES key (8 bytes).
pub const KEY_LEN: usize = 8;

/// DES block size, which is also the IV length.
pub const BLOCK_SIZE: usize = 8;

const NAME: &str = "DES";

/// Encrypt `plaintext` with an IV from the OS CSPRNG.
///
/// Output layout: `iv (8) || ciphertext`, where the ciphertext is the padded
/// plaintext and therefore always a non-zero multiple of [`BLOCK_SIZE`].
///
/// # Errors
///
/// See [`encrypt_with`].
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    encrypt_with(plaintext, key, &SystemRandom)
}

/// Encrypt `plaintext`, drawing the IV from `rng`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeySize`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`CipherError::RandomSourceFailure`] if no IV can be generated.
pub fn encrypt_with<R>(plaintext: &[u8], key: &[u8], rng: &R) -> Result<Vec<u8>, CipherError>
where
    R: RandomSource + ?Sized,
{
    check_key(key)?;

    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill(&mut iv)?;

    let mut enc = DesCbcEnc::new_from_slices(key, &iv).map_err(|_| invalid_key(key))?;

    let mut blob = Vec::with_capacity(BLOCK_SIZE + plaintext.len() + BLOCK_SIZE);
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&padding::pad(plaintext, BLOCK_SIZE));
    for block in blob[BLOCK_SIZE..].chunks_exact_mut(BLOCK_SIZE) {
        enc.encrypt_block_mut(GenericArray::from_mut_slice(block));
    }
    Ok(blob)
}

/// Decrypt and unpad a blob produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeySize`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`CipherError::MalformedInput`] if `blob` is shorter than one block
/// or its body is not a whole number of blocks.
/// Returns [`CipherError::InvalidPadding`] if the recovered padding is out of range.
pub fn decrypt(blob: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    check_key(key)?;
    if blob.len() < BLOCK_SIZE {
        return Err(CipherError::MalformedInput("ciphertext too short"));
    }
    let (iv, body) = blob.split_at(BLOCK_SIZE);
    if body.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::MalformedInput(
            "ciphertext is not a multiple of the block size",
        ));
    }

    let mut dec = DesCbcDec::new_from_slices(key, iv).map_err(|_| invalid_key(key))?;
    let mut buf = body.to_vec();
    for block in buf.chunks_exact_mut(BLOCK_SIZE) {
        dec.decrypt_block_mut(GenericArray::from_mut_slice(block));
    }
    padding::unpad(buf, BLOCK_SIZE)
}

fn check_key(key: &[u8]) -> Result<(), CipherError> {
    if key.len() != KEY_LEN {
        return Err(invalid_key(key));
    }
    Ok(())
}

fn invalid_key(key: &[u8]) -> CipherError {
    CipherError::InvalidKeySize {
        algorithm: NAME,
        expected: KEY_LEN,
        actual: key.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::random::MockRandomSource;

    const KEY: &[u8] = b"12345678";

    fn fixed_iv(byte: u8) -> MockRandomSource {
        let mut rng = MockRandomSource::new();
        rng.expect_fill().returning(move |buf| {
            buf.fill(byte);
            Ok(())
        });
        rng
    }

    #[test]
    fn hello_world_layout() {
        let blob = encrypt(b"Hello, World!", KEY).unwrap();
        assert_eq!(blob.len(), BLOCK_SIZE + 16);
        assert_eq!(decrypt(&blob, KEY).unwrap(), b"Hello, World!");
    }

    #[test]
    fn aligned_plaintext_gains_a_block() {
        let blob = encrypt(&[7u8; 16], KEY).unwrap();
        assert_eq!(blob.len(), BLOCK_SIZE + 24);
        assert_eq!(decrypt(&blob, KEY).unwrap(), vec![7u8; 16]);
    }

    #[test]
    fn empty_plaintext_round_trip() {
        let blob = encrypt(b"", KEY).unwrap();
        assert_eq!(blob.len(), 2 * BLOCK_SIZE);
        assert!(decrypt(&blob, KEY).unwrap().is_empty());
    }

    #[test]
    fn iv_comes_from_random_source() {
        let rng = fixed_iv(0x11);
        let blob = encrypt_with(b"abc", KEY, &rng).unwrap();
        assert_eq!(&blob[..BLOCK_SIZE], &[0x11; BLOCK_SIZE]);
        assert_eq!(decrypt(&blob, KEY).unwrap(), b"abc");
    }

    #[test]
    fn same_iv_is_deterministic() {
        let a = encrypt_with(b"same input", KEY, &fixed_iv(3)).unwrap();
        let b = encrypt_with(b"same input", KEY, &fixed_iv(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_source_failure_propagates() {
        let mut rng = MockRandomSource::new();
        rng.expect_fill()
            .returning(|_| Err(CipherError::RandomSourceFailure("no entropy".into())));
        let err = encrypt_with(b"data", KEY, &rng).unwrap_err();
        assert!(matches!(err, CipherError::RandomSourceFailure(_)));
    }

    #[test]
    fn invalid_key_length_rejected() {
        let err = encrypt(b"x", b"1234567890123456").unwrap_err();
        assert_eq!(err.code(), "invalid_key_size");
        let err = decrypt(&[0u8; 16], b"1234").unwrap_err();
        assert_eq!(err.code(), "invalid_key_size");
    }

    #[test]
    fn short_blob_is_malformed() {
        let err = decrypt(&[0u8; BLOCK_SIZE - 1], KEY).unwrap_err();
        assert!(matches!(err, CipherError::MalformedInput(_)));
    }

    #[test]
    fn partial_block_is_malformed() {
        let mut blob = encrypt(b"Hello, World!", KEY).unwrap();
        blob.pop();
        let err = decrypt(&blob, KEY).unwrap_err();
        assert!(matches!(err, CipherError::MalformedInput(_)));
    }

    #[test]
    fn iv_only_blob_has_invalid_padding() {
        assert_eq!(
            decrypt(&[0u8; BLOCK_SIZE], KEY),
            Err(CipherError::InvalidPadding)
        );
    }

    #[test]
    fn garbage_padding_is_rejected() {
        // Find an IV under which the last decrypted byte falls outside 1..=8.
        let blob = encrypt_with(b"1234567", KEY, &fixed_iv(0)).unwrap();
        let mut rejected = false;
        for flip in 0..=u8::MAX {
            let mut tampered = blob.clone();
            // Flipping the IV's last byte flips the last plaintext byte of block one.
            tampered[BLOCK_SIZE - 1] ^= flip;
            let last = 1u8 ^ flip;
            if last == 0 || last > BLOCK_SIZE as u8 {
                assert_eq!(decrypt(&tampered, KEY), Err(CipherError::InvalidPadding));
                rejected = true;
            }
        }
        assert!(rejected);
    }
}
