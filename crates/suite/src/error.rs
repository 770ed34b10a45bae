//! Error type shared by every cipher variant and the selector.

use thiserror::Error;

/// Errors produced by the cipher suite.
///
/// Messages never carry key bytes or plaintext. Each variant has a stable
/// machine-readable [`code`](CipherError::code) suitable for log fields:
/// - [`CipherError::UnsupportedAlgorithm`] → `unsupported_algorithm`
/// - [`CipherError::InvalidKeySize`] → `invalid_key_size`
/// - [`CipherError::MalformedInput`] → `malformed_input`
/// - [`CipherError::AuthenticationFailure`] → `authentication_failure`
/// - [`CipherError::InvalidPadding`] → `invalid_padding`
/// - [`CipherError::RandomSourceFailure`] → `random_source_failure`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The algorithm name does not match any known variant.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The key length does not match the variant's required key size.
    #[error("invalid key size for {algorithm}: expected {expected} bytes, got {actual}")]
    InvalidKeySize {
        /// Name of the variant that rejected the key.
        algorithm: &'static str,
        /// Required key length in bytes.
        expected: usize,
        /// Length of the key that was supplied.
        actual: usize,
    },

    /// The blob is too short or not shaped like this variant's framing.
    #[error("malformed input: {0}")]
    MalformedInput(&'static str),

    /// GCM tag verification failed: the blob was tampered with or the key is wrong.
    #[error("authentication failed")]
    AuthenticationFailure,

    /// CBC unpadding found an out-of-range padding length.
    #[error("invalid padding")]
    InvalidPadding,

    /// The secure random source could not produce a nonce or IV.
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),
}

impl CipherError {
    /// Returns the short machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CipherError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            CipherError::InvalidKeySize { .. } => "invalid_key_size",
            CipherError::MalformedInput(_) => "malformed_input",
            CipherError::AuthenticationFailure => "authentication_failure",
            CipherError::InvalidPadding => "invalid_padding",
            CipherError::RandomSourceFailure(_) => "random_source_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(
            CipherError::UnsupportedAlgorithm("x".into()).code(),
            "unsupported_algorithm"
        );
        assert_eq!(
            CipherError::InvalidKeySize {
                algorithm: "AES",
                expected: 16,
                actual: 3
            }
            .code(),
            "invalid_key_size"
        );
        assert_eq!(CipherError::MalformedInput("x").code(), "malformed_input");
        assert_eq!(
            CipherError::AuthenticationFailure.code(),
            "authentication_failure"
        );
        assert_eq!(CipherError::InvalidPadding.code(), "invalid_padding");
        assert_eq!(
            CipherError::RandomSourceFailure("x".into()).code(),
            "random_source_failure"
        );
    }

    #[test]
    fn display_includes_sizes() {
        let e = CipherError::InvalidKeySize {
            algorithm: "DES",
            expected: 8,
            actual: 5,
        };
        let msg = e.to_string();
        assert!(msg.contains("DES"));
        assert!(msg.contains("expected 8"));
        assert!(msg.contains("got 5"));
    }

    #[test]
    fn display_echoes_only_algorithm_name() {
        let e = CipherError::UnsupportedAlgorithm("blowfish".into());
        assert_eq!(e.to_string(), "unsupported algorithm: blowfish");
    }
}
