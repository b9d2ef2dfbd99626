//! Configuration Module - Environment-based Configuration
//!
//! Loads the RPC endpoint and signing credential from the process
//! environment and validates the credential's shape before any client is
//! constructed. A malformed credential is fatal: the process halts with a
//! clear message before the menu is ever shown.

use anyhow::{Context, Result};

use crate::domain::InputError;

/// Process configuration, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP JSON-RPC endpoint used for all reads and broadcasts.
    pub rpc_url: String,
    /// Hex-encoded 32-byte signing key, `0x`-prefixed. Never logged.
    pub private_key: String,
}

impl AppConfig {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if `RPC_URL` or `PRIVATE_KEY` is missing or empty,
    /// or if the private key fails shape validation.
    pub fn from_env() -> Result<Self> {
        let rpc_url =
            std::env::var("RPC_URL").context("RPC_URL environment variable not set")?;
        if rpc_url.trim().is_empty() {
            anyhow::bail!("RPC_URL environment variable is empty");
        }

        let private_key = std::env::var("PRIVATE_KEY")
            .context("PRIVATE_KEY environment variable not set")?;
        validate_private_key(&private_key)?;

        Ok(Self {
            rpc_url,
            private_key,
        })
    }
}

/// Checks that a private key is `0x` followed by exactly 64 hex digits.
///
/// Shape only; key material is never echoed back in the error.
fn validate_private_key(key: &str) -> Result<(), InputError> {
    let hex = key.strip_prefix("0x").ok_or(InputError::PrivateKey)?;
    if hex.len() != 64 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InputError::PrivateKey);
    }
    Ok(())
}
