//! Input validation errors.
//!
//! Everything a user (or the environment) can get wrong before any network
//! call is made. Remote failures are plain `anyhow` errors at the adapter
//! boundary; these are the typed, locally-detectable rejections.

use thiserror::Error;

/// Rejection of user or environment input, raised before any RPC call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Amount did not parse as a strictly positive decimal number.
    #[error("invalid amount {0:?}: must be a positive decimal number")]
    Amount(String),

    /// Address is not `0x` followed by exactly 40 hex characters.
    #[error("invalid address {0:?}: expected 0x followed by 40 hexadecimal characters")]
    Address(String),

    /// Private key is not `0x` followed by exactly 64 hex characters.
    ///
    /// The offending value is deliberately not carried: the key must never
    /// appear in logs or error output.
    #[error("invalid PRIVATE_KEY: expected a hex string starting with 0x and containing 64 hexadecimal characters")]
    PrivateKey,
}
