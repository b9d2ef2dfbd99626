//! WETH Contract Interactions
//!
//! Implements the `ChainClient` port against the canonical mainnet WETH
//! contract. Calldata is built by hand from keccak selectors: the contract
//! surface is three entry points, small enough that full ABI bindings would
//! be overkill. Writes go through the provider's wallet filler, so they are
//! signed and broadcast in one call; the transaction hash is returned
//! without waiting for confirmation.

use std::sync::Arc;

use alloy::primitives::{address, keccak256, Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, instrument};

use crate::ports::chain_client::ChainClient;

use super::provider::EthereumProvider;

/// Canonical WETH contract on Ethereum mainnet.
pub const WETH_ADDRESS: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

/// `balanceOf(address)` calldata: 4-byte selector + 32-byte padded address.
fn balance_of_calldata(owner: Address) -> Bytes {
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&keccak256(b"balanceOf(address)")[..4]);
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(owner.as_slice());
    Bytes::from(data)
}

/// `deposit()` calldata: selector only, the amount travels as tx value.
fn deposit_calldata() -> Bytes {
    Bytes::from(keccak256(b"deposit()")[..4].to_vec())
}

/// `withdraw(uint256)` calldata: selector + 32-byte big-endian amount.
fn withdraw_calldata(amount: U256) -> Bytes {
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&keccak256(b"withdraw(uint256)")[..4]);
    data.extend_from_slice(&amount.to_be_bytes::<32>());
    Bytes::from(data)
}

/// Implements WETH operations via alloy-rs 0.9.
pub struct WethContract {
    /// Shared Ethereum RPC provider (reads and signed writes).
    provider: Arc<EthereumProvider>,
    /// WETH contract address.
    address: Address,
}

impl WethContract {
    /// Bind to the canonical mainnet WETH contract.
    pub fn new(provider: Arc<EthereumProvider>) -> Self {
        Self {
            provider,
            address: WETH_ADDRESS,
        }
    }
}

#[async_trait]
impl ChainClient for WethContract {
    #[instrument(skip(self), fields(address = %address))]
    async fn native_balance(&self, address: Address) -> Result<U256> {
        self.provider
            .inner()
            .get_balance(address)
            .await
            .context("eth_getBalance query failed")
    }

    #[instrument(skip(self), fields(address = %address))]
    async fn wrapped_balance(&self, address: Address) -> Result<U256> {
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(balance_of_calldata(address).into());

        let result = self
            .provider
            .inner()
            .call(&tx)
            .await
            .context("WETH balanceOf call failed")?;

        Ok(U256::from_be_slice(&result))
    }

    #[instrument(skip(self), fields(value = %value))]
    async fn deposit(&self, value: U256) -> Result<TxHash> {
        let tx = TransactionRequest::default()
            .to(self.address)
            .value(value)
            .input(deposit_calldata().into());

        let pending = self
            .provider
            .inner()
            .send_transaction(tx)
            .await
            .context("deposit transaction rejected by the node")?;

        let tx_hash = *pending.tx_hash();
        info!(tx_hash = %tx_hash, "Deposit transaction broadcast");
        Ok(tx_hash)
    }

    #[instrument(skip(self), fields(amount = %amount))]
    async fn withdraw(&self, amount: U256) -> Result<TxHash> {
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(withdraw_calldata(amount).into());

        let pending = self
            .provider
            .inner()
            .send_transaction(tx)
            .await
            .context("withdraw transaction rejected by the node")?;

        let tx_hash = *pending.tx_hash();
        info!(tx_hash = %tx_hash, "Withdraw transaction broadcast");
        Ok(tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calldata_uses_the_known_weth_selectors() {
        assert_eq!(&deposit_calldata()[..], &[0xd0, 0xe3, 0x0d, 0xb0]);
        assert_eq!(&withdraw_calldata(U256::ZERO)[..4], &[0x2e, 0x1a, 0x7d, 0x4d]);
        assert_eq!(
            &balance_of_calldata(Address::ZERO)[..4],
            &[0x70, 0xa0, 0x82, 0x31]
        );
    }

    #[test]
    fn balance_of_calldata_left_pads_the_address() {
        let data = balance_of_calldata(WETH_ADDRESS);
        assert_eq!(data.len(), 36);
        assert_eq!(&data[4..16], &[0u8; 12]);
        assert_eq!(&data[16..], WETH_ADDRESS.as_slice());
    }

    #[test]
    fn withdraw_calldata_encodes_the_amount_big_endian() {
        let data = withdraw_calldata(U256::from(1_000_000_000_000_000_000u128));
        assert_eq!(data.len(), 36);
        assert_eq!(U256::from_be_slice(&data[4..]), U256::from(1_000_000_000_000_000_000u128));
    }
}
