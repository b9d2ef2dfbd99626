//! Chain Client Port - On-chain Interaction Interface
//!
//! Defines the trait for interacting with the Ethereum blockchain:
//! balance queries plus the two WETH write entry points. The use-case
//! layer is generic over this trait so tests can substitute a mock
//! in place of live network calls.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

/// Trait for on-chain interactions via alloy-rs.
///
/// All amounts are in wei. Writes broadcast one signed transaction and
/// return its hash immediately; no confirmation is awaited.
#[async_trait]
pub trait ChainClient: Send + Sync + 'static {
    /// Get the native ETH balance of an address, in wei.
    async fn native_balance(&self, address: Address) -> anyhow::Result<U256>;

    /// Get the WETH balance of an address, in wei.
    async fn wrapped_balance(&self, address: Address) -> anyhow::Result<U256>;

    /// Wrap ETH: call the payable `deposit()` entry point, carrying
    /// `value` wei as the transaction's native-currency value.
    async fn deposit(&self, value: U256) -> anyhow::Result<TxHash>;

    /// Unwrap WETH: call `withdraw(uint256)` with `amount` wei as its
    /// sole argument and zero transaction value.
    async fn withdraw(&self, amount: U256) -> anyhow::Result<TxHash>;
}
