//! Exact ETH ⇄ wei conversion.
//!
//! WETH is denominated in wei (10^-18 ETH). Binary floating point cannot
//! represent wei-scale integers exactly, so amounts are parsed with
//! `rust_decimal` and scaled with exact `U256` integer arithmetic. Decimal's
//! 96-bit mantissa cannot hold every possible wei balance, which is why the
//! scaling and the display formatting run on `U256` directly.

use std::str::FromStr;

use alloy::primitives::U256;
use rust_decimal::Decimal;

use super::error::InputError;

/// Number of decimals of the canonical WETH contract.
///
/// Fixed by design: the target is always the well-known 18-decimal mainnet
/// instance, so no on-chain `decimals()` query is made.
pub const WETH_DECIMALS: u32 = 18;

/// Converts a human-entered decimal ETH amount to wei.
///
/// Rejects anything that is not a strictly positive finite decimal number
/// (including scientific notation). Digits beyond the 18th fractional place
/// are truncated toward zero; sub-wei dust is dropped silently.
pub fn to_wei(input: &str) -> Result<U256, InputError> {
    let reject = || InputError::Amount(input.to_string());

    let amount = Decimal::from_str(input.trim()).map_err(|_| reject())?;
    if amount <= Decimal::ZERO {
        return Err(reject());
    }

    // Positive Decimal, so the mantissa fits u128.
    let amount = amount.normalize();
    let mantissa = U256::from(amount.mantissa().unsigned_abs());
    let scale = amount.scale();

    let ten = U256::from(10u64);
    if scale <= WETH_DECIMALS {
        Ok(mantissa * ten.pow(U256::from(WETH_DECIMALS - scale)))
    } else {
        // More than 18 fractional digits: truncate the dust toward zero.
        Ok(mantissa / ten.pow(U256::from(scale - WETH_DECIMALS)))
    }
}

/// Renders a wei balance as a decimal ETH string for display.
///
/// Exact for the full `U256` range: the integer digits are split 18 places
/// from the right and trailing fractional zeros are trimmed. Never rounds.
pub fn from_wei(wei: U256) -> String {
    let digits = wei.to_string();
    let places = WETH_DECIMALS as usize;

    // Pad so there is always at least one integer digit.
    let padded = format!("{digits:0>width$}", width = places + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - places);

    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}
