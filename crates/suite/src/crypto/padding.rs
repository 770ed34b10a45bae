//! PKCS#7 padding for block-mode variants.

use crate::error::CipherError;

/// Pad `data` to a multiple of `block_size`.
///
/// Always appends between 1 and `block_size` bytes, each holding the pad
/// length, so block-aligned input gains a full extra block.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let padding = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + padding);
    out.extend_from_slice(data);
    out.resize(data.len() + padding, padding as u8);
    out
}

/// Strip PKCS#7 padding from a decrypted buffer.
///
/// Only the final byte is inspected. The remaining pad bytes are not checked
/// against it, so a crafted buffer with inconsistent padding is accepted as
/// long as its length byte is in range.
///
/// # Errors
///
/// Returns [`CipherError::InvalidPadding`] if `data` is empty, or if the pad
/// length is zero, larger than `block_size`, or larger than `data`.
pub fn unpad(mut data: Vec<u8>, block_size: usize) -> Result<Vec<u8>, CipherError> {
    let padding = match data.last() {
        Some(&b) => usize::from(b),
        None => return Err(CipherError::InvalidPadding),
    };
    if padding == 0 || padding > block_size || padding > data.len() {
        return Err(CipherError::InvalidPadding);
    }
    data.truncate(data.len() - padding);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_partial_block() {
        let padded = pad(b"Hello, World!", 8);
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[13..], &[3, 3, 3]);
    }

    #[test]
    fn aligned_input_gains_full_block() {
        let padded = pad(&[0xAA; 8], 8);
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[8..], &[8u8; 8]);
    }

    #[test]
    fn empty_input_becomes_one_block() {
        assert_eq!(pad(&[], 8), vec![8u8; 8]);
    }

    #[test]
    fn unpad_reverses_pad() {
        for len in 0..=17 {
            let data: Vec<u8> = (0..len as u8).collect();
            assert_eq!(unpad(pad(&data, 8), 8).unwrap(), data);
        }
    }

    #[test]
    fn unpad_rejects_empty() {
        assert_eq!(unpad(Vec::new(), 8), Err(CipherError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_zero() {
        assert_eq!(
            unpad(vec![1, 2, 3, 4, 5, 6, 7, 0], 8),
            Err(CipherError::InvalidPadding)
        );
    }

    #[test]
    fn unpad_rejects_oversized_padding() {
        assert_eq!(unpad(vec![9u8; 16], 8), Err(CipherError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_padding_longer_than_buffer() {
        assert_eq!(unpad(vec![4, 4, 4], 8), Err(CipherError::InvalidPadding));
    }

    #[test]
    fn unpad_trusts_final_byte_only() {
        // Inconsistent pad bytes are accepted; only the final byte counts.
        let out = unpad(vec![1, 2, 3, 4, 5, 9, 9, 3], 8).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }
}
