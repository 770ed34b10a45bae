//! Encrypt the input file, then decrypt the result back out.

use std::fs;

use anyhow::{Context, Result};
use cipher_suite::{Algorithm, CipherError};
use tracing::{info, warn};

use crate::config::Config;

/// Sizes observed during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Algorithm that was applied.
    pub algorithm: Algorithm,
    /// Bytes read from the input file.
    pub input_len: usize,
    /// Bytes written to the encrypted file.
    pub blob_len: usize,
    /// Bytes written to the decrypted file.
    pub recovered_len: usize,
}

/// Run the encrypt → write → decrypt → write sequence described by `cfg`.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written, or if either
/// cipher operation fails. Nothing is written for a failed stage.
pub fn run(cfg: &Config) -> Result<Outcome> {
    let algorithm = cfg.cipher()?;
    let key = cfg.key.as_bytes();

    let data = fs::read(&cfg.input_file)
        .with_context(|| format!("failed to read input file {}", cfg.input_file.display()))?;

    let blob = algorithm
        .encrypt(&data, key)
        .map_err(|e| log_failure(e, "encrypt"))
        .context("encryption failed")?;
    fs::write(&cfg.encrypted_file, &blob).with_context(|| {
        format!(
            "failed to write encrypted file {}",
            cfg.encrypted_file.display()
        )
    })?;
    info!(
        algorithm = %algorithm,
        bytes = blob.len(),
        path = %cfg.encrypted_file.display(),
        "file encrypted"
    );

    let recovered = algorithm
        .decrypt(&blob, key)
        .map_err(|e| log_failure(e, "decrypt"))
        .context("decryption failed")?;
    fs::write(&cfg.decrypted_file, &recovered).with_context(|| {
        format!(
            "failed to write decrypted file {}",
            cfg.decrypted_file.display()
        )
    })?;
    info!(
        algorithm = %algorithm,
        bytes = recovered.len(),
        path = %cfg.decrypted_file.display(),
        "file decrypted"
    );

    Ok(Outcome {
        algorithm,
        input_len: data.len(),
        blob_len: blob.len(),
        recovered_len: recovered.len(),
    })
}

fn log_failure(e: CipherError, stage: &'static str) -> CipherError {
    warn!(stage, code = e.code(), error = %e, "cipher operation failed");
    e
}
