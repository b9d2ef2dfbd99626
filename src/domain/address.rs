//! Chain address validation.

use alloy::primitives::Address;

use super::error::InputError;

/// Parses a user-supplied Ethereum address.
///
/// Accepts exactly `0x` followed by 40 hex digits, case-insensitive on the
/// digits. No checksum enforcement; anything else is rejected before any
/// network call is made with it.
pub fn parse_address(input: &str) -> Result<Address, InputError> {
    let reject = || InputError::Address(input.to_string());

    let trimmed = input.trim();
    let hex = trimmed.strip_prefix("0x").ok_or_else(reject)?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(reject());
    }

    trimmed.parse::<Address>().map_err(|_| reject())
}
