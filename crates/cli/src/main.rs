//! `cipher-suite` — driver binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`](config::Config) from `cipher-suite.toml` and the environment.
//! 2. Initialise structured JSON logging.
//! 3. Encrypt `INPUT_FILE` into `ENCRYPTED_FILE`, then decrypt it into `DECRYPTED_FILE`.

mod config;
mod pipeline;
mod telemetry;

use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = config::Config::load().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: cipher-suite configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        algorithm = %cfg.algorithm,
        "cipher-suite starting"
    );

    // -----------------------------------------------------------------------
    // 3. Encrypt, then decrypt
    // -----------------------------------------------------------------------
    let outcome = pipeline::run(&cfg)?;
    info!(
        algorithm = %outcome.algorithm,
        input_bytes = outcome.input_len,
        blob_bytes = outcome.blob_len,
        recovered_bytes = outcome.recovered_len,
        "cipher-suite finished"
    );
    Ok(())
}
