//! Configuration loading and validation for the `cipher-suite` driver.
//!
//! Values come from an optional `cipher-suite.toml` in the working directory,
//! overridden by environment variables of the same name (`ALGORITHM`, `KEY`,
//! `INPUT_FILE`, ...). The process exits with a clear error if any required
//! value is missing or the key does not fit the chosen algorithm.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cipher_suite::{resolve_algorithm, Algorithm};
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;

/// File stem of the optional configuration file.
const CONFIG_FILE_STEM: &str = "cipher-suite";

/// Raw key bytes taken from configuration.
///
/// Never printed, and overwritten with zeroes when dropped.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(String);

impl SecretKey {
    /// The key as raw bytes, exactly as configured.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        let mut bytes = std::mem::take(&mut self.0).into_bytes();
        bytes.iter_mut().for_each(|b| *b = 0);
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Validated driver configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Algorithm name, case-insensitive (`AES`, `DES` or `RC4`). **Required.**
    pub algorithm: String,

    /// Encryption key; its byte length must match the algorithm. **Required.**
    pub key: SecretKey,

    /// File to encrypt. **Required.**
    pub input_file: PathBuf,

    /// Where the encrypted blob is written. **Required.**
    pub encrypted_file: PathBuf,

    /// Where the decrypted bytes are written. **Required.**
    pub decrypted_file: PathBuf,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from `cipher-suite.toml` (if present)
    /// and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if any required value is absent, the algorithm is
    /// unknown, or the key has the wrong length.
    pub fn load() -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE_STEM).required(false))
            .add_source(config::Environment::default());
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let cfg = builder
            .build()
            .context("failed to build cipher-suite configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise cipher-suite configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// The resolved algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if `algorithm` names no supported variant.
    pub fn cipher(&self) -> Result<Algorithm> {
        resolve_algorithm(&self.algorithm)
            .with_context(|| format!("ALGORITHM {:?} is not supported", self.algorithm))
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.algorithm.trim().is_empty() {
            anyhow::bail!("ALGORITHM is required and must not be empty");
        }
        ensure_path(&self.input_file, "INPUT_FILE")?;
        ensure_path(&self.encrypted_file, "ENCRYPTED_FILE")?;
        ensure_path(&self.decrypted_file, "DECRYPTED_FILE")?;

        let algorithm = self.cipher()?;
        let expected = algorithm.required_key_size();
        if self.key.len() != expected {
            anyhow::bail!(
                "KEY must be {expected} bytes for {algorithm}, got {}",
                self.key.len()
            );
        }
        Ok(())
    }
}

fn ensure_path(value: &Path, name: &str) -> Result<()> {
    if value.as_os_str().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}
